mod options;

pub use self::options::RadiantOptions;
use super::{Tool, ToolError, run_tool, write_file};
use crate::{
    classification::{Classification, classify_files},
    command_graph::{BuildStep, CommandGraph, DEFAULT_LAUNCHER},
    context::Context,
    debug,
    ir::{FileType, ParameterKind, Parameters, Project, SourceFile},
    parse::parse,
    warning,
};
use async_trait::async_trait;
use itertools::Itertools;

const TOOL: &str = "radiantc";
const HEADER: &str = "#Generated by edagen";
const IMPLEMENTATION: &str = "impl";
const BUILD_FILE: &str = "Makefile";
const DEFAULT_WORK_LIBRARY: &str = "work";

/// Lattice Radiant backend.
///
/// Configuration writes a project script creating a Radiant project, a run
/// script driving synthesis through bitstream generation, and a build file
/// chaining the two `radiantc` invocations.
pub struct Radiant<'a> {
    project: &'a Project,
    options: RadiantOptions,
}

impl<'a> Radiant<'a> {
    pub fn new(project: &'a Project, options: RadiantOptions) -> Self {
        Self { project, options }
    }

    fn project_name(&self) -> String {
        self.project.name().replace('.', "_")
    }

    fn project_script(&self) -> String {
        format!("{}.tcl", self.project.name())
    }

    fn run_script(&self) -> String {
        format!("{}_run.tcl", self.project.name())
    }

    fn project_file(&self) -> String {
        format!("{}.rdf", self.project_name())
    }

    fn bitstream(&self) -> String {
        format!(
            "{}/{}_{}.bit",
            IMPLEMENTATION,
            self.project_name(),
            IMPLEMENTATION
        )
    }

    async fn render_project_script(
        &self,
        context: &Context,
        files: &[SourceFile],
        include_directories: &[String],
    ) -> String {
        let mut lines = vec![
            HEADER.to_owned(),
            format!(
                "prj_create -name {} -impl \"{}\" -dev {}",
                self.project_name(),
                IMPLEMENTATION,
                self.options.part()
            ),
            format!("prj_set_impl_opt top {}", self.project.toplevel()),
        ];

        if !include_directories.is_empty() {
            lines.push(format!(
                "prj_set_impl_opt {{include path}} {{{}}}",
                include_directories.join(" ")
            ));
        }

        // Generics and Verilog parameters share a directive and are written
        // separately.
        lines.extend(
            [
                render_option(
                    "HDL_PARAM",
                    self.project.parameters(ParameterKind::Generic),
                    "",
                ),
                render_option(
                    "HDL_PARAM",
                    self.project.parameters(ParameterKind::Vlogparam),
                    "\"",
                ),
                render_option(
                    "VERILOG_DIRECTIVES",
                    self.project.parameters(ParameterKind::Vlogdefine),
                    "",
                ),
            ]
            .into_iter()
            .flatten(),
        );

        lines.extend(
            classify_files(
                context,
                select_constraint_files(context, files).await,
                source_directive,
            )
            .await,
        );
        lines.extend(["prj_save".to_owned(), "prj_close".to_owned()]);

        render_lines(lines)
    }

    fn render_run_script(&self) -> String {
        render_lines([
            HEADER.to_owned(),
            format!("prj_open {}", self.project_file()),
            format!("prj_run Synthesis -impl {} -forceOne", IMPLEMENTATION),
            format!("prj_run Map -impl {}", IMPLEMENTATION),
            format!("prj_run PAR -impl {}", IMPLEMENTATION),
            format!("prj_run Export -impl {} -task Bitgen", IMPLEMENTATION),
            "prj_save".into(),
            "prj_close".into(),
        ])
    }

    fn command_graph(&self, files: &[SourceFile]) -> CommandGraph {
        let mut graph = CommandGraph::new(DEFAULT_LAUNCHER);

        graph.add(BuildStep::new(
            vec![TOOL.into(), self.project_script()],
            vec![self.project_file()],
            [self.project_script()]
                .into_iter()
                .chain(files.iter().map(|file| file.name().into()))
                .collect(),
            vec![],
        ));
        graph.add(BuildStep::new(
            vec![TOOL.into(), self.run_script()],
            vec![self.bitstream()],
            vec![self.project_file(), self.run_script()],
            vec![],
        ));
        graph.set_default_target(self.bitstream());

        graph
    }
}

#[async_trait]
impl Tool for Radiant<'_> {
    async fn configure(&self, context: &Context) -> Result<(), ToolError> {
        let (files, include_directories) = self.project.fileset().collect(false);
        let build_file = self.command_graph(&files).render()?;
        let project_script = self
            .render_project_script(context, &files, &include_directories)
            .await;

        context
            .file_system()
            .create_directory(self.project.work_root())
            .await?;

        write_file(
            context,
            self.project,
            &self.project_script(),
            &project_script,
        )
        .await?;
        write_file(
            context,
            self.project,
            &self.run_script(),
            &self.render_run_script(),
        )
        .await?;
        write_file(context, self.project, BUILD_FILE, &build_file).await?;

        Ok(())
    }

    async fn build(&self, context: &Context) -> Result<(), ToolError> {
        let mut source = String::new();

        context
            .file_system()
            .read_file_to_string(&self.project.work_root().join(BUILD_FILE), &mut source)
            .await?;

        let graph = CommandGraph::from_build_file(&parse(&source)?, DEFAULT_LAUNCHER);
        let steps = graph.schedule()?;

        debug!(
            context,
            "scheduled {} of {} build steps",
            steps.len(),
            graph.steps().len()
        );

        for step in steps {
            if let Some((program, arguments)) = step.command().split_first() {
                run_tool(context, self.project, program, arguments, true).await?;
            }
        }

        Ok(())
    }

    async fn run(&self, _context: &Context) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Keeps only the first PDC file.
async fn select_constraint_files<'a>(
    context: &Context,
    files: &'a [SourceFile],
) -> Vec<&'a SourceFile> {
    let mut constraint_file = None::<&SourceFile>;
    let mut selected = vec![];

    for file in files {
        if FileType::detect(file.file_type()) == FileType::Pdc {
            if let Some(constraint_file) = constraint_file {
                warning!(
                    context,
                    "multiple PDC files detected. Only {} is used and {} is ignored",
                    constraint_file.name(),
                    file.name()
                );
                continue;
            }

            constraint_file = Some(file);
        }

        selected.push(file);
    }

    selected
}

fn source_directive(file: &SourceFile) -> Classification<String> {
    match FileType::detect(file.file_type()) {
        FileType::VerilogSource
        | FileType::SystemVerilogSource
        | FileType::VhdlSource
        | FileType::Pdc
        | FileType::Sdc => Classification::Accepted(format!(
            "prj_add_source {} -work {}",
            file.name(),
            file.logical_name()
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_WORK_LIBRARY)
        )),
        FileType::TclSource => Classification::Accepted(format!("source {}", file.name())),
        FileType::User | FileType::Lpf => Classification::Ignored,
        FileType::CSource
        | FileType::CppSource
        | FileType::SystemCSource
        | FileType::Vlt
        | FileType::Other(_) => Classification::Unknown,
    }
}

fn render_option(name: &str, parameters: &Parameters, quote: &str) -> Option<String> {
    (!parameters.is_empty()).then(|| {
        format!(
            "prj_set_impl_opt {} {{{}}}",
            name,
            parameters
                .iter()
                .map(|(key, value)| format!("{}={}", key, value.format(quote)))
                .join(";")
        )
    })
}

fn render_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
