use crate::ir::{FileType, SourceFile};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[clap(about = "Project, script and build file generator for EDA toolchains", version)]
pub struct Arguments {
    #[clap(help = "Select a tool backend")]
    pub tool: Tool,
    #[clap(long, help = "Set a project name")]
    pub name: String,
    #[clap(long, default_value = "", help = "Set a top module")]
    pub toplevel: String,
    #[clap(short = 'C', default_value = ".", help = "Set a work root directory")]
    pub work_root: String,
    #[clap(
        short,
        value_parser = parse_source_file,
        help = "Add a source file as PATH:TYPE[:LOGICAL_NAME]"
    )]
    pub file: Vec<SourceFile>,
    #[clap(short = 'I', help = "Add an include directory")]
    pub include_directory: Vec<String>,
    #[clap(long, value_parser = parse_pair, help = "Set a VHDL generic")]
    pub generic: Vec<(String, String)>,
    #[clap(long, value_parser = parse_pair, help = "Set a Verilog parameter")]
    pub vlogparam: Vec<(String, String)>,
    #[clap(long, value_parser = parse_pair, help = "Set a Verilog define")]
    pub vlogdefine: Vec<(String, String)>,
    #[clap(long, value_parser = parse_pair, help = "Set a simulation plusarg")]
    pub plusarg: Vec<(String, String)>,
    #[clap(long, value_parser = parse_pair, help = "Set a simulation command-line argument")]
    pub cmdlinearg: Vec<(String, String)>,
    #[clap(short = 'o', value_parser = parse_pair, help = "Set a tool option")]
    pub tool_option: Vec<(String, String)>,
    #[clap(long, value_enum, default_value = "configure", help = "Set the last stage to execute")]
    pub stage: Stage,
    #[clap(long, help = "Show output of tool invocations")]
    pub verbose: bool,
    #[clap(long, help = "Show debug logs", env = "EDAGEN_DEBUG")]
    pub debug: bool,
    #[clap(long, help = "Prefix every tool invocation", env = "EDA_LAUNCHER")]
    pub launcher: Option<String>,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Tool {
    Radiant,
    Verilator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Stage {
    Configure,
    Build,
    Run,
}

fn parse_pair(string: &str) -> Result<(String, String), String> {
    match string.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.into(), value.into())),
        _ => Err(format!("invalid NAME=VALUE pair: {}", string)),
    }
}

/// Splits known file types from the right so that paths may contain colons.
fn parse_source_file(string: &str) -> Result<SourceFile, String> {
    let known = |file_type: &str| !matches!(FileType::detect(file_type), FileType::Other(_));

    let fields = match string.rsplitn(3, ':').collect::<Vec<_>>()[..] {
        [logical_name, file_type, path] if known(file_type) => {
            Some((path, file_type, Some(logical_name)))
        }
        _ => None,
    }
    .or_else(|| {
        string
            .rsplit_once(':')
            .filter(|(_, file_type)| known(file_type))
            .map(|(path, file_type)| (path, file_type, None))
    })
    .or_else(|| match string.splitn(3, ':').collect::<Vec<_>>()[..] {
        [path, file_type] => Some((path, file_type, None)),
        [path, file_type, logical_name] => Some((path, file_type, Some(logical_name))),
        _ => None,
    });

    match fields {
        Some((path, file_type, logical_name)) if !path.is_empty() && !file_type.is_empty() => Ok(
            SourceFile::new(path, file_type, logical_name.map(From::from)),
        ),
        _ => Err(format!("invalid PATH:TYPE[:LOGICAL_NAME] source file: {}", string)),
    }
}
