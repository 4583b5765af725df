mod command_runner;
mod console;
mod error;
#[cfg(test)]
mod fake;
mod file_system;

pub use command_runner::*;
pub use console::*;
pub use error::*;
#[cfg(test)]
pub use fake::*;
pub use file_system::*;
