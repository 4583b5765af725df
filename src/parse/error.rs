use std::{
    error::Error,
    fmt::{self, Display},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    message: String,
    line: Option<usize>,
}

impl ParseError {
    pub fn new(source: &str, error: nom::Err<nom::error::Error<&str>>) -> Self {
        match error {
            nom::Err::Error(error) | nom::Err::Failure(error) => Self {
                message: format!("{:?}", error.code),
                line: Some(
                    source[..source.len() - error.input.len()]
                        .matches('\n')
                        .count()
                        + 1,
                ),
            },
            nom::Err::Incomplete(_) => Self {
                message: "unexpected end of build file".into(),
                line: None,
            },
        }
    }
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(
                formatter,
                "failed to parse build file at line {}: {}",
                line, &self.message
            )
        } else {
            write!(formatter, "failed to parse build file: {}", &self.message)
        }
    }
}
