use super::verilator::Mode;
use crate::{command_graph::CommandGraphError, parse::ParseError};
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ToolError {
    CommandGraph(CommandGraphError),
    IllegalMode(String),
    MissingOption(&'static str),
    MissingTopModule(String),
    Other(String),
    Parse(ParseError),
}

impl Error for ToolError {}

impl Display for ToolError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::CommandGraph(error) => write!(formatter, "{}", error),
            Self::IllegalMode(mode) => write!(
                formatter,
                "illegal verilator mode {}. Allowed values are {}",
                mode,
                Mode::ALL.iter().map(|mode| mode.name()).join(", ")
            ),
            Self::MissingOption(name) => {
                write!(formatter, "missing mandatory tool option '{}'", name)
            }
            Self::MissingTopModule(name) => {
                write!(
                    formatter,
                    "'{}' miss a mandatory parameter 'top_module'",
                    name
                )
            }
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<Box<dyn Error>> for ToolError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<CommandGraphError> for ToolError {
    fn from(error: CommandGraphError) -> Self {
        Self::CommandGraph(error)
    }
}

impl From<ParseError> for ToolError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
