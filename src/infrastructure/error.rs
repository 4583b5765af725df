use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InfrastructureError {
    ChildExit { program: String, code: Option<i32> },
}

impl Error for InfrastructureError {}

impl Display for InfrastructureError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::ChildExit {
                program,
                code: Some(code),
            } => {
                write!(formatter, "{} exited with status code {}", program, code)
            }
            Self::ChildExit {
                program,
                code: None,
            } => {
                write!(formatter, "{} exited without status code", program)
            }
        }
    }
}
