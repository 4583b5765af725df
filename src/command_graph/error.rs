use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandGraphError {
    CircularDependency(String),
    DefaultTargetMissing,
    DefaultTargetNotFound(String),
    DuplicateTarget(String),
    EmptyTargets(usize),
}

impl Error for CommandGraphError {}

impl Display for CommandGraphError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::CircularDependency(targets) => {
                write!(formatter, "dependency cycle detected at \"{}\"", targets)
            }
            Self::DefaultTargetMissing => write!(formatter, "default target missing"),
            Self::DefaultTargetNotFound(target) => {
                write!(formatter, "default target \"{}\" not found", target)
            }
            Self::DuplicateTarget(target) => {
                write!(formatter, "target \"{}\" produced by multiple steps", target)
            }
            Self::EmptyTargets(index) => {
                write!(formatter, "build step {} has no targets", index)
            }
        }
    }
}
