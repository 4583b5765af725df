use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
}

impl ParameterValue {
    /// Infers a value type from raw command-line text.
    pub fn parse(value: &str) -> Self {
        match value {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => {
                if let Ok(integer) = value.parse() {
                    Self::Integer(integer)
                } else if let (true, Ok(real)) = (
                    value.bytes().any(|byte| byte.is_ascii_digit()),
                    value.parse(),
                ) {
                    Self::Real(real)
                } else {
                    Self::String(value.into())
                }
            }
        }
    }

    /// Formats a value as a tool directive token. Only strings are quoted.
    pub fn format(&self, quote: &str) -> String {
        match self {
            Self::Bool(value) => if *value { "1" } else { "0" }.into(),
            Self::Integer(value) => value.to_string(),
            Self::Real(value) => format!("{:?}", value),
            Self::String(value) => format!("{}{}{}", quote, value, quote),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

/// Parameters in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    parameters: Vec<(String, ParameterValue)>,
}

impl Parameters {
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, current)) = self
            .parameters
            .iter_mut()
            .find(|(current, _)| *current == name)
        {
            *current = value;
        } else {
            self.parameters.push((name, value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iterator: T) -> Self {
        let mut parameters = Self::new();

        for (name, value) in iterator {
            parameters.insert(name, value);
        }

        parameters
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Cmdlinearg,
    Generic,
    Plusarg,
    Vlogdefine,
    Vlogparam,
}

pub type ParameterMap = HashMap<ParameterKind, Parameters>;
