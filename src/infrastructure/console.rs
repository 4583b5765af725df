use async_trait::async_trait;
use std::error::Error;
use tokio::io::{AsyncWriteExt, Stderr, stderr};

#[async_trait]
pub trait Console {
    async fn write_line(&mut self, line: &str) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug)]
pub struct OsConsole {
    stderr: Stderr,
}

impl OsConsole {
    pub fn new() -> Self {
        Self { stderr: stderr() }
    }
}

#[async_trait]
impl Console for OsConsole {
    async fn write_line(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        self.stderr.write_all(line.as_bytes()).await?;
        self.stderr.write_all(b"\n").await?;
        self.stderr.flush().await?;

        Ok(())
    }
}
