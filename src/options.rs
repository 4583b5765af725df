#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    /// Shows output of tool invocations even when they succeed.
    pub verbose: bool,
}
