use super::{CommandRunner, Console, FileSystem, InfrastructureError};
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    error::Error,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

#[derive(Clone, Debug, Default)]
pub struct FakeFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    directories: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn directories(&self) -> Vec<PathBuf> {
        self.directories.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileSystem for FakeFileSystem {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error>> {
        let contents = self
            .file(path)
            .ok_or_else(|| format!("file not found: {}", path.display()))?;

        buffer.push_str(&contents);

        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.into());

        Ok(())
    }

    async fn create_directory(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        self.directories.lock().unwrap().push(path.into());

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub arguments: Vec<String>,
    pub directory: PathBuf,
    pub quiet: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FakeCommandRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    failing_program: Option<String>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(program: impl Into<String>) -> Self {
        Self {
            failing_program: Some(program.into()),
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Returns each invocation as a program followed by its arguments.
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.invocations()
            .into_iter()
            .map(|invocation| {
                [invocation.program]
                    .into_iter()
                    .chain(invocation.arguments)
                    .collect()
            })
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeCommandRunner {
    async fn run(
        &self,
        program: &str,
        arguments: &[String],
        directory: &Path,
        quiet: bool,
    ) -> Result<(), Box<dyn Error>> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.into(),
            arguments: arguments.to_vec(),
            directory: directory.into(),
            quiet,
        });

        if self.failing_program.as_deref() == Some(program) {
            return Err(InfrastructureError::ChildExit {
                program: program.into(),
                code: Some(1),
            }
            .into());
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeConsole {
    lines: Arc<Mutex<Vec<String>>>,
    closed: bool,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console failing on every write.
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl Console for FakeConsole {
    async fn write_line(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        if self.closed {
            return Err("console closed".into());
        }

        self.lines.lock().unwrap().push(line.into());

        Ok(())
    }
}
