use super::SourceFile;
use itertools::Itertools;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fileset {
    files: Vec<SourceFile>,
    include_directories: Vec<String>,
}

impl Fileset {
    pub fn new(files: Vec<SourceFile>, include_directories: Vec<String>) -> Self {
        Self {
            files,
            include_directories,
        }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Returns source files in their original order and unique include
    /// directories in order of first appearance.
    pub fn collect(&self, force_slash: bool) -> (Vec<SourceFile>, Vec<String>) {
        let normalize = |path: &str| {
            if force_slash {
                path.replace('\\', "/")
            } else {
                path.into()
            }
        };

        (
            self.files
                .iter()
                .map(|file| file.with_name(normalize(file.name())))
                .collect(),
            self.include_directories
                .iter()
                .map(|directory| normalize(directory.as_str()))
                .unique()
                .collect(),
        )
    }
}
