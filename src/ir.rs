mod file_type;
mod fileset;
mod parameter;
mod project;
mod source_file;
mod tool_options;

pub use file_type::*;
pub use fileset::*;
pub use parameter::*;
pub use project::*;
pub use source_file::*;
pub use tool_options::*;
