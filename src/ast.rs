mod build_file;
mod rule;

pub use build_file::*;
pub use rule::*;
