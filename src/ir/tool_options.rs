use std::collections::HashMap;

/// Free-form tool options. Every option keeps all of its values in order so
/// that scalar options read the last one and list options read all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOptions {
    options: HashMap<String, Vec<String>>,
}

impl ToolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.options
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.options
            .get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn list(&self, name: &str) -> &[String] {
        self.options
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToolOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iterator: T) -> Self {
        let mut options = Self::new();

        for (name, value) in iterator {
            options.insert(name, value);
        }

        options
    }
}
