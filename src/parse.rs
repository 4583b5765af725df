mod error;
mod parser;

pub use self::error::ParseError;
use crate::ast::BuildFile;

pub fn parse(source: &str) -> Result<BuildFile<'_>, ParseError> {
    parser::build_file(source)
        .map(|(_, build_file)| build_file)
        .map_err(|error| ParseError::new(source, error))
}
