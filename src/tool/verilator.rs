mod mode;
mod options;
mod template;

pub(crate) use self::mode::Mode;
use self::mode::BuildAction;
pub use self::options::VerilatorOptions;
use super::{Tool, ToolError, run_tool, write_file};
use crate::{
    classification::{Classification, classify_files},
    context::Context,
    debug,
    ir::{FileType, ParameterKind, Project, SourceFile},
    warning,
};
use async_trait::async_trait;

const BUILD_TOOL: &str = "make";
const BUILD_FILE: &str = "Makefile";
const CONFIG_FILE: &str = "config.mk";
const HDL_PARAMETER_QUOTE: &str = "\\\"";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SourceGroup {
    Configuration,
    Hdl,
    Native,
}

/// Verilator backend generating a command file consumed by a static build
/// file.
pub struct Verilator<'a> {
    project: &'a Project,
    options: VerilatorOptions,
}

impl<'a> Verilator<'a> {
    pub fn new(project: &'a Project, options: VerilatorOptions) -> Self {
        Self { project, options }
    }

    fn command_file(&self) -> String {
        format!("{}.vc", self.project.name())
    }

    async fn check_cli_parser(&self, context: &Context) {
        if !self.options.managed_cli_parser() {
            warning!(
                context,
                "cli_parser option is deprecated. Use run_options to pass raw arguments to verilated models"
            );
        }
    }

    async fn render_command_file(&self, context: &Context) -> String {
        let (files, include_directories) = self.project.fileset().collect(true);
        let files = classify_files(context, &files, classify_source).await;
        let group = |group: SourceGroup| {
            files
                .iter()
                .filter(move |(current, _)| *current == group)
                .map(|(_, name)| name.clone())
        };

        let mut lines = vec!["--Mdir .".to_owned()];

        lines.extend(self.options.mode().behavior().config_flag.map(From::from));
        lines.extend(
            self.options
                .libraries()
                .iter()
                .map(|library| format!("-LDFLAGS {}", library)),
        );

        for directory in &include_directories {
            lines.push(format!("+incdir+{}", directory));
            lines.push(format!("-CFLAGS -I{}", directory));
        }

        lines.extend(group(SourceGroup::Configuration));
        lines.extend(group(SourceGroup::Hdl));
        lines.push(format!("--top-module {}", self.project.toplevel()));

        if self.options.executable() {
            lines.push("--exe".into());
        }

        lines.extend(group(SourceGroup::Native));
        lines.extend(
            self.project
                .parameters(ParameterKind::Vlogparam)
                .iter()
                .map(|(name, value)| format!("-G{}={}", name, value.format(HDL_PARAMETER_QUOTE))),
        );
        lines.extend(
            self.project
                .parameters(ParameterKind::Vlogdefine)
                .iter()
                .map(|(name, value)| format!("-D{}={}", name, value.format(""))),
        );

        lines.into_iter().map(|line| line + "\n").collect()
    }

    fn model_arguments(&self) -> Vec<String> {
        self.project
            .parameters(ParameterKind::Plusarg)
            .iter()
            .map(|(name, value)| format!("+{}={}", name, value.format("")))
            .chain(
                self.project
                    .parameters(ParameterKind::Cmdlinearg)
                    .iter()
                    .map(|(name, value)| format!("--{}={}", name, value.format(""))),
            )
            .chain(self.options.run_options().iter().cloned())
            .collect()
    }
}

#[async_trait]
impl Tool for Verilator<'_> {
    async fn configure(&self, context: &Context) -> Result<(), ToolError> {
        self.check_cli_parser(context).await;

        if self.project.toplevel().is_empty() {
            return Err(ToolError::MissingTopModule(self.project.name().into()));
        }

        let command_file = self.render_command_file(context).await;

        context
            .file_system()
            .create_directory(self.project.work_root())
            .await?;

        write_file(context, self.project, &self.command_file(), &command_file).await?;
        write_file(context, self.project, BUILD_FILE, template::MAKEFILE).await?;
        write_file(
            context,
            self.project,
            CONFIG_FILE,
            &template::render_config(
                self.project.toplevel(),
                &self.command_file(),
                self.options.verilator_options(),
                self.options.make_options(),
            ),
        )
        .await?;

        Ok(())
    }

    async fn build(&self, context: &Context) -> Result<(), ToolError> {
        let targets = match self.options.mode().behavior().build_action {
            BuildAction::Default => Some(vec![]),
            BuildAction::Phony(target) => Some(vec![target.to_owned()]),
            BuildAction::Skip => None,
        };

        debug!(context, "building simulation model");

        for arguments in targets
            .into_iter()
            .chain(self.options.extra_targets().map(|target| vec![target.to_owned()]))
        {
            run_tool(context, self.project, BUILD_TOOL, &arguments, true).await?;
        }

        Ok(())
    }

    async fn run(&self, context: &Context) -> Result<(), ToolError> {
        self.check_cli_parser(context).await;

        if !self.options.mode().behavior().runnable {
            return Ok(());
        }

        debug!(context, "running simulation");

        run_tool(
            context,
            self.project,
            &format!("./V{}", self.project.toplevel()),
            &self.model_arguments(),
            false,
        )
        .await
    }
}

fn classify_source(file: &SourceFile) -> Classification<(SourceGroup, String)> {
    let group = match FileType::detect(file.file_type()) {
        FileType::Vlt => SourceGroup::Configuration,
        FileType::VerilogSource | FileType::SystemVerilogSource => SourceGroup::Hdl,
        FileType::CppSource | FileType::SystemCSource | FileType::CSource => SourceGroup::Native,
        FileType::User => return Classification::Ignored,
        FileType::Lpf
        | FileType::Pdc
        | FileType::Sdc
        | FileType::TclSource
        | FileType::VhdlSource
        | FileType::Other(_) => return Classification::Unknown,
    };

    Classification::Accepted((group, file.name().into()))
}
