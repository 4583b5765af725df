use super::mode::Mode;
use crate::{ir::ToolOptions, tool::ToolError};

const MANAGED_CLI_PARSER: &str = "managed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerilatorOptions {
    mode: Mode,
    executable: bool,
    managed_cli_parser: bool,
    generate_xml: bool,
    generate_dpi_header: bool,
    generate_preprocessed: bool,
    libraries: Vec<String>,
    verilator_options: Vec<String>,
    make_options: Vec<String>,
    run_options: Vec<String>,
}

impl VerilatorOptions {
    pub fn new(options: &ToolOptions) -> Result<Self, ToolError> {
        let flag = |name| {
            options
                .scalar(name)
                .is_some_and(|value| value.eq_ignore_ascii_case("true"))
        };

        Ok(Self {
            mode: options
                .scalar("mode")
                .map(str::parse::<Mode>)
                .transpose()?
                .unwrap_or_default(),
            executable: !options
                .scalar("exe")
                .is_some_and(|value| value.eq_ignore_ascii_case("false")),
            managed_cli_parser: options
                .scalar("cli_parser")
                .is_none_or(|value| value == MANAGED_CLI_PARSER),
            generate_xml: flag("gen-xml"),
            generate_dpi_header: flag("gen-dpi-hdr"),
            generate_preprocessed: flag("gen-preprocess"),
            libraries: options.list("libs").to_vec(),
            verilator_options: options.list("verilator_options").to_vec(),
            make_options: options.list("make_options").to_vec(),
            run_options: options.list("run_options").to_vec(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` unless linking an executable is left to someone else.
    pub fn executable(&self) -> bool {
        self.executable
    }

    pub fn managed_cli_parser(&self) -> bool {
        self.managed_cli_parser
    }

    /// Returns extra phony targets built after the mode's own build action.
    pub fn extra_targets(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.generate_xml, Mode::XmlOnly),
            (self.generate_dpi_header, Mode::DpiHdrOnly),
            (self.generate_preprocessed, Mode::PreprocessOnly),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, mode)| mode.name())
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn verilator_options(&self) -> &[String] {
        &self.verilator_options
    }

    pub fn make_options(&self) -> &[String] {
        &self.make_options
    }

    pub fn run_options(&self) -> &[String] {
        &self.run_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> VerilatorOptions {
        VerilatorOptions::new(&pairs.into_iter().collect()).unwrap()
    }

    #[test]
    fn use_defaults() {
        let options = options([]);

        assert_eq!(options.mode(), Mode::Cc);
        assert!(options.executable());
        assert!(options.managed_cli_parser());
        assert_eq!(options.extra_targets().count(), 0);
        assert!(options.run_options().is_empty());
    }

    #[test]
    fn read_mode() {
        assert_eq!(options([("mode", "lint-only")]).mode(), Mode::LintOnly);
    }

    #[test]
    fn fail_on_illegal_mode() {
        assert_eq!(
            VerilatorOptions::new(&[("mode", "fast")].into_iter().collect()),
            Err(ToolError::IllegalMode("fast".into()))
        );
    }

    #[test]
    fn disable_executable_case_insensitively() {
        assert!(!options([("exe", "FALSE")]).executable());
        assert!(!options([("exe", "false")]).executable());
        assert!(options([("exe", "no")]).executable());
    }

    #[test]
    fn detect_unmanaged_cli_parser() {
        assert!(!options([("cli_parser", "raw")]).managed_cli_parser());
        assert!(options([("cli_parser", "managed")]).managed_cli_parser());
    }

    #[test]
    fn read_extra_targets_in_order() {
        assert_eq!(
            options([
                ("gen-preprocess", "True"),
                ("gen-xml", "true"),
                ("gen-dpi-hdr", "yes"),
            ])
            .extra_targets()
            .collect::<Vec<_>>(),
            ["xml-only", "preprocess-only"]
        );
    }

    #[test]
    fn read_lists() {
        let options = options([
            ("libs", "-lz"),
            ("make_options", "OPT_FAST=-O2"),
            ("libs", "-lpthread"),
        ]);

        assert_eq!(options.libraries(), ["-lz", "-lpthread"]);
        assert_eq!(options.make_options(), ["OPT_FAST=-O2"]);
        assert!(options.verilator_options().is_empty());
    }
}
