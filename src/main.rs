mod arguments;
mod ast;
mod classification;
mod command_graph;
mod context;
mod error;
mod infrastructure;
mod ir;
mod log;
mod options;
mod parse;
mod tool;

use arguments::{Arguments, Stage};
use clap::Parser;
use context::Context;
use error::ApplicationError;
use infrastructure::{OsCommandRunner, OsConsole, OsFileSystem};
use ir::{Fileset, ParameterKind, ParameterValue, Parameters, Project, ToolOptions};
use options::Options;
use std::process::exit;
use tool::{Radiant, RadiantOptions, Tool, Verilator, VerilatorOptions};

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Context::new(
        OsCommandRunner::new(arguments.launcher.as_deref()),
        OsConsole::new(),
        OsFileSystem::new(),
        Options {
            debug: arguments.debug,
            verbose: arguments.verbose,
        },
    );

    if let Err(error) = execute(&context, &arguments).await {
        let _ = context
            .console()
            .lock()
            .await
            .write_line(&format!(
                "{}{}",
                arguments.log_prefix.as_deref().unwrap_or_default(),
                error
            ))
            .await;

        exit(1)
    }
}

async fn execute(context: &Context, arguments: &Arguments) -> Result<(), ApplicationError> {
    let project = Project::new(
        &arguments.name,
        &arguments.toplevel,
        &arguments.work_root,
        Fileset::new(arguments.file.clone(), arguments.include_directory.clone()),
        [
            (ParameterKind::Cmdlinearg, &arguments.cmdlinearg),
            (ParameterKind::Generic, &arguments.generic),
            (ParameterKind::Plusarg, &arguments.plusarg),
            (ParameterKind::Vlogdefine, &arguments.vlogdefine),
            (ParameterKind::Vlogparam, &arguments.vlogparam),
        ]
        .into_iter()
        .map(|(kind, pairs)| {
            (
                kind,
                pairs
                    .iter()
                    .map(|(name, value)| (name.as_str(), ParameterValue::parse(value)))
                    .collect::<Parameters>(),
            )
        })
        .collect(),
    );
    let options = arguments
        .tool_option
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect::<ToolOptions>();

    debug!(
        context,
        "{} project {} with {} files",
        match arguments.tool {
            arguments::Tool::Radiant => "radiant",
            arguments::Tool::Verilator => "verilator",
        },
        project.name(),
        project.fileset().files().len()
    );

    match arguments.tool {
        arguments::Tool::Radiant => {
            execute_stages(
                context,
                &Radiant::new(&project, RadiantOptions::new(&options)?),
                arguments.stage,
            )
            .await
        }
        arguments::Tool::Verilator => {
            execute_stages(
                context,
                &Verilator::new(&project, VerilatorOptions::new(&options)?),
                arguments.stage,
            )
            .await
        }
    }
}

async fn execute_stages(
    context: &Context,
    tool: &dyn Tool,
    stage: Stage,
) -> Result<(), ApplicationError> {
    tool.configure(context).await?;

    if stage >= Stage::Build {
        tool.build(context).await?;
    }

    if stage >= Stage::Run {
        tool.run(context).await?;
    }

    Ok(())
}
