#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    file_type: String,
    logical_name: Option<String>,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        file_type: impl Into<String>,
        logical_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file_type: file_type.into(),
            logical_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn logical_name(&self) -> Option<&str> {
        self.logical_name.as_deref()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}
