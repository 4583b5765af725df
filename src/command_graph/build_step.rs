#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildStep {
    command: Vec<String>,
    targets: Vec<String>,
    depends: Vec<String>,
    order_only_depends: Vec<String>,
}

impl BuildStep {
    pub fn new(
        command: Vec<String>,
        targets: Vec<String>,
        depends: Vec<String>,
        order_only_depends: Vec<String>,
    ) -> Self {
        Self {
            command,
            targets,
            depends,
            order_only_depends,
        }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    pub fn order_only_depends(&self) -> &[String] {
        &self.order_only_depends
    }
}
