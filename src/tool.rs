mod error;
mod radiant;
mod verilator;

pub use self::{
    error::ToolError,
    radiant::{Radiant, RadiantOptions},
    verilator::{Verilator, VerilatorOptions},
};
use crate::{context::Context, debug, ir::Project};
use async_trait::async_trait;
use itertools::Itertools;

/// A backend translating a project into invocations of one external tool.
///
/// Configuration only writes files. Building and running invoke external
/// processes strictly one after another.
#[async_trait]
pub trait Tool {
    async fn configure(&self, context: &Context) -> Result<(), ToolError>;
    async fn build(&self, context: &Context) -> Result<(), ToolError>;
    async fn run(&self, context: &Context) -> Result<(), ToolError>;
}

async fn write_file(
    context: &Context,
    project: &Project,
    name: &str,
    contents: &str,
) -> Result<(), ToolError> {
    let path = project.work_root().join(name);

    debug!(context, "writing {}", path.display());

    context.file_system().write_file(&path, contents).await?;

    Ok(())
}

async fn run_tool(
    context: &Context,
    project: &Project,
    program: &str,
    arguments: &[String],
    quiet: bool,
) -> Result<(), ToolError> {
    debug!(
        context,
        "running {}",
        [program]
            .into_iter()
            .chain(arguments.iter().map(String::as_str))
            .join(" ")
    );

    context
        .command_runner()
        .run(
            program,
            arguments,
            project.work_root(),
            quiet && !context.options().verbose,
        )
        .await?;

    Ok(())
}
