use super::{Fileset, ParameterKind, ParameterMap, Parameters};
use std::path::{Path, PathBuf};

static EMPTY_PARAMETERS: Parameters = Parameters::new();

/// A normalized project description shared read-only by every tool backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    name: String,
    toplevel: String,
    work_root: PathBuf,
    fileset: Fileset,
    parameters: ParameterMap,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        toplevel: impl Into<String>,
        work_root: impl Into<PathBuf>,
        fileset: Fileset,
        parameters: ParameterMap,
    ) -> Self {
        Self {
            name: name.into(),
            toplevel: toplevel.into(),
            work_root: work_root.into(),
            fileset,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toplevel(&self) -> &str {
        &self.toplevel
    }

    pub fn work_root(&self) -> &Path {
        &self.work_root
    }

    pub fn fileset(&self) -> &Fileset {
        &self.fileset
    }

    pub fn parameters(&self, kind: ParameterKind) -> &Parameters {
        self.parameters.get(&kind).unwrap_or(&EMPTY_PARAMETERS)
    }
}
