use async_trait::async_trait;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::Path,
};
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncWriteExt},
};

#[async_trait]
pub trait FileSystem: Debug {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error>>;
    /// Writes a whole file, replacing any previous contents.
    async fn write_file(&self, path: &Path, contents: &str) -> Result<(), Box<dyn Error>>;
    async fn create_directory(&self, path: &Path) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem {}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error>> {
        File::open(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?
            .read_to_string(buffer)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
        let mut file = File::create(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        file.write_all(contents.as_bytes())
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;
        file.flush()
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        Ok(())
    }

    async fn create_directory(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        Ok(())
    }
}

#[derive(Debug)]
pub struct OsFileSystemError {
    error: io::Error,
    path: String,
}

impl OsFileSystemError {
    pub fn new(error: io::Error, path: &Path) -> Self {
        Self {
            error,
            path: path.display().to_string(),
        }
    }
}

impl Error for OsFileSystemError {}

impl Display for OsFileSystemError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", &self.error, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_and_read_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("foo.tcl");
        let file_system = OsFileSystem::new();

        file_system.write_file(&path, "prj_save\n").await.unwrap();

        let mut buffer = String::new();
        file_system
            .read_file_to_string(&path, &mut buffer)
            .await
            .unwrap();

        assert_eq!(buffer, "prj_save\n");
    }

    #[tokio::test]
    async fn overwrite_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("foo.tcl");
        let file_system = OsFileSystem::new();

        file_system.write_file(&path, "prj_open\nprj_save\n").await.unwrap();
        file_system.write_file(&path, "prj_close\n").await.unwrap();

        let mut buffer = String::new();
        file_system
            .read_file_to_string(&path, &mut buffer)
            .await
            .unwrap();

        assert_eq!(buffer, "prj_close\n");
    }

    #[tokio::test]
    async fn create_nested_directory() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("foo/bar");

        OsFileSystem::new().create_directory(&path).await.unwrap();

        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn report_path_of_missing_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("missing.mk");

        let error = OsFileSystem::new()
            .read_file_to_string(&path, &mut String::new())
            .await
            .unwrap_err();

        assert!(error.to_string().ends_with("missing.mk"));
    }
}
