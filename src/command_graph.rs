mod build_step;
mod error;

pub use self::{build_step::BuildStep, error::CommandGraphError};
use crate::ast::BuildFile;
use itertools::Itertools;
use petgraph::{
    Graph,
    algo::toposort,
    graph::{DefaultIx, NodeIndex},
    visit::DfsPostOrder,
};
use std::{borrow::Cow, collections::HashMap};

pub const DEFAULT_LAUNCHER: &str = "$(EDA_LAUNCHER)";
pub const AGGREGATE_TARGET: &str = "all";

const DEFAULT_HEADER: &str = "#Auto generated by edagen\n\n";
const ESCAPED_CHARACTERS: &str = " \t:|#\\";

/// Build steps serialized into a make-compatible build file whose aggregate
/// target depends on exactly one default target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandGraph {
    header: String,
    launcher: String,
    steps: Vec<BuildStep>,
    default_target: Option<String>,
}

impl CommandGraph {
    pub fn new(launcher: impl Into<String>) -> Self {
        Self {
            header: DEFAULT_HEADER.into(),
            launcher: launcher.into(),
            steps: vec![],
            default_target: None,
        }
    }

    /// Restores a graph from a build file written by [`CommandGraph::render`].
    pub fn from_build_file(build_file: &BuildFile, launcher: &str) -> Self {
        let mut graph = Self::new(launcher);

        for rule in build_file.rules() {
            graph.add(BuildStep::new(
                rule.command()
                    .map(|command| match command.split_first() {
                        Some((first, rest)) if !launcher.is_empty() && first == launcher => {
                            collect_strings(rest)
                        }
                        _ => collect_strings(command),
                    })
                    .unwrap_or_default(),
                collect_strings(rule.targets()),
                collect_strings(rule.depends()),
                collect_strings(rule.order_only_depends()),
            ));
        }

        graph.set_default_target(build_file.default_target());

        graph
    }

    pub fn add(&mut self, step: BuildStep) {
        self.steps.push(step);
    }

    pub fn set_default_target(&mut self, target: impl Into<String>) {
        self.default_target = Some(target.into());
    }

    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    pub fn validate(&self) -> Result<(), CommandGraphError> {
        self.dependency_graph()?;

        Ok(())
    }

    pub fn render(&self) -> Result<String, CommandGraphError> {
        let default_target = self
            .default_target
            .as_deref()
            .ok_or(CommandGraphError::DefaultTargetMissing)?;

        self.validate()?;

        let mut string = self.header.clone();

        string += &format!("{}: {}\n", AGGREGATE_TARGET, escape(default_target));

        for step in &self.steps {
            string += &format!(
                "\n{}:",
                step.targets().iter().map(|target| escape(target)).join(" ")
            );

            for dependency in step.depends() {
                string += &format!(" {}", escape(dependency));
            }

            if !step.order_only_depends().is_empty() {
                string += " |";

                for dependency in step.order_only_depends() {
                    string += &format!(" {}", escape(dependency));
                }
            }

            string += "\n";

            if !step.command().is_empty() {
                string += &format!(
                    "\t{}\n",
                    [Cow::from(self.launcher.as_str())]
                        .into_iter()
                        .filter(|launcher| !launcher.is_empty())
                        .chain(step.command().iter().map(|token| escape(token)))
                        .join(" ")
                );
            }
        }

        Ok(string)
    }

    /// Returns the steps the default target needs, dependencies first.
    pub fn schedule(&self) -> Result<Vec<&BuildStep>, CommandGraphError> {
        let (graph, root) = self.dependency_graph()?;
        let mut search = DfsPostOrder::new(&graph, root);
        let mut steps = vec![];

        while let Some(node) = search.next(&graph) {
            steps.push(&self.steps[graph[node]]);
        }

        Ok(steps)
    }

    fn dependency_graph(
        &self,
    ) -> Result<(Graph<usize, ()>, NodeIndex<DefaultIx>), CommandGraphError> {
        let default_target = self
            .default_target
            .as_deref()
            .ok_or(CommandGraphError::DefaultTargetMissing)?;
        let mut graph = Graph::<usize, ()>::new();
        let mut indexes = HashMap::<&str, NodeIndex<DefaultIx>>::new();
        let mut nodes = vec![];

        for (index, step) in self.steps.iter().enumerate() {
            if step.targets().is_empty() {
                return Err(CommandGraphError::EmptyTargets(index));
            }

            let node = graph.add_node(index);
            nodes.push(node);

            for target in step.targets() {
                if indexes.insert(target.as_str(), node).is_some() {
                    return Err(CommandGraphError::DuplicateTarget(target.clone()));
                }
            }
        }

        for (step, &node) in self.steps.iter().zip(&nodes) {
            for dependency in step.depends().iter().chain(step.order_only_depends()) {
                // Dependencies without steps are source files.
                if let Some(&dependency) = indexes.get(dependency.as_str()) {
                    graph.add_edge(node, dependency, ());
                }
            }
        }

        toposort(&graph, None).map_err(|cycle| {
            CommandGraphError::CircularDependency(
                self.steps[graph[cycle.node_id()]].targets().join(" "),
            )
        })?;

        let root = indexes
            .get(default_target)
            .copied()
            .ok_or_else(|| CommandGraphError::DefaultTargetNotFound(default_target.into()))?;

        Ok((graph, root))
    }
}

/// Escapes characters the build file syntax or a shell would split on.
fn escape(string: &str) -> Cow<'_, str> {
    if !string.contains(|character: char| ESCAPED_CHARACTERS.contains(character)) {
        return string.into();
    }

    let mut escaped = String::with_capacity(string.len());

    for character in string.chars() {
        if ESCAPED_CHARACTERS.contains(character) {
            escaped.push('\\');
        }

        escaped.push(character);
    }

    escaped.into()
}

fn collect_strings(strings: &[impl AsRef<str>]) -> Vec<String> {
    strings.iter().map(|string| string.as_ref().into()).collect()
}
