use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    targets: Vec<Cow<'a, str>>,
    depends: Vec<Cow<'a, str>>,
    order_only_depends: Vec<Cow<'a, str>>,
    command: Option<Vec<Cow<'a, str>>>,
}

impl<'a> Rule<'a> {
    pub fn new(
        targets: Vec<Cow<'a, str>>,
        depends: Vec<Cow<'a, str>>,
        order_only_depends: Vec<Cow<'a, str>>,
        command: Option<Vec<Cow<'a, str>>>,
    ) -> Self {
        Self {
            targets,
            depends,
            order_only_depends,
            command,
        }
    }

    pub fn targets(&self) -> &[Cow<'a, str>] {
        &self.targets
    }

    pub fn depends(&self) -> &[Cow<'a, str>] {
        &self.depends
    }

    pub fn order_only_depends(&self) -> &[Cow<'a, str>] {
        &self.order_only_depends
    }

    /// Returns unescaped command tokens including any launcher.
    pub fn command(&self) -> Option<&[Cow<'a, str>]> {
        self.command.as_deref()
    }
}
