use super::InfrastructureError;
use async_trait::async_trait;
use std::{error::Error, path::Path};
use tokio::{
    io::{AsyncWriteExt, stderr},
    process::Command,
};

#[async_trait]
pub trait CommandRunner {
    /// Runs a program to completion. A non-zero exit status is an error.
    async fn run(
        &self,
        program: &str,
        arguments: &[String],
        directory: &Path,
        quiet: bool,
    ) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug, Default)]
pub struct OsCommandRunner {
    launcher: Vec<String>,
}

impl OsCommandRunner {
    pub fn new(launcher: Option<&str>) -> Self {
        Self {
            launcher: launcher
                .map(|launcher| launcher.split_whitespace().map(From::from).collect())
                .unwrap_or_default(),
        }
    }

    fn command(&self, program: &str, arguments: &[String], directory: &Path) -> Command {
        let mut command = if let Some((launcher, launcher_arguments)) = self.launcher.split_first()
        {
            let mut command = Command::new(launcher);
            command.args(launcher_arguments).arg(program);
            command
        } else {
            Command::new(program)
        };

        command.args(arguments).current_dir(directory);

        command
    }
}

#[async_trait]
impl CommandRunner for OsCommandRunner {
    async fn run(
        &self,
        program: &str,
        arguments: &[String],
        directory: &Path,
        quiet: bool,
    ) -> Result<(), Box<dyn Error>> {
        let mut command = self.command(program, arguments, directory);

        let status = if quiet {
            let output = command.output().await?;

            if !output.status.success() {
                stderr().write_all(&output.stdout).await?;
                stderr().write_all(&output.stderr).await?;
            }

            output.status
        } else {
            command.status().await?
        };

        if status.success() {
            Ok(())
        } else {
            Err(InfrastructureError::ChildExit {
                program: program.into(),
                code: status.code(),
            }
            .into())
        }
    }
}
