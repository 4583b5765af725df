use super::Rule;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildFile<'a> {
    default_target: Cow<'a, str>,
    rules: Vec<Rule<'a>>,
}

impl<'a> BuildFile<'a> {
    pub fn new(default_target: impl Into<Cow<'a, str>>, rules: Vec<Rule<'a>>) -> Self {
        Self {
            default_target: default_target.into(),
            rules,
        }
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }

    pub fn rules(&self) -> &[Rule<'a>] {
        &self.rules
    }
}
