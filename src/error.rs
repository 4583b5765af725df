use crate::tool::ToolError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Other(String),
    Tool(ToolError),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Tool(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ToolError> for ApplicationError {
    fn from(error: ToolError) -> Self {
        Self::Tool(error)
    }
}
