use crate::tool::ToolError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Binary,
    #[default]
    Cc,
    DpiHdrOnly,
    LintOnly,
    None,
    PreprocessOnly,
    Sc,
    XmlOnly,
}

/// How a build targets the generated build file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildAction {
    Default,
    Phony(&'static str),
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeBehavior {
    pub config_flag: Option<&'static str>,
    pub build_action: BuildAction,
    pub runnable: bool,
}

impl Mode {
    pub const ALL: [Self; 8] = [
        Self::Binary,
        Self::Cc,
        Self::DpiHdrOnly,
        Self::LintOnly,
        Self::None,
        Self::PreprocessOnly,
        Self::Sc,
        Self::XmlOnly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Cc => "cc",
            Self::DpiHdrOnly => "dpi-hdr-only",
            Self::LintOnly => "lint-only",
            Self::None => "none",
            Self::PreprocessOnly => "preprocess-only",
            Self::Sc => "sc",
            Self::XmlOnly => "xml-only",
        }
    }

    pub fn behavior(self) -> ModeBehavior {
        let (config_flag, build_action, runnable) = match self {
            Self::Cc => (Some("--cc"), BuildAction::Default, true),
            Self::Sc => (Some("--sc"), BuildAction::Default, true),
            Self::Binary => (None, BuildAction::Phony(self.name()), true),
            Self::DpiHdrOnly | Self::LintOnly | Self::PreprocessOnly | Self::XmlOnly => {
                (None, BuildAction::Phony(self.name()), false)
            }
            Self::None => (None, BuildAction::Skip, true),
        };

        ModeBehavior {
            config_flag,
            build_action,
            runnable,
        }
    }
}

impl FromStr for Mode {
    type Err = ToolError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == string)
            .ok_or_else(|| ToolError::IllegalMode(string.into()))
    }
}
