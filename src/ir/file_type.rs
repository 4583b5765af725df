/// A source file type with any version suffix (e.g. `verilogSource-2005`)
/// stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileType {
    CSource,
    CppSource,
    Lpf,
    Pdc,
    Sdc,
    SystemCSource,
    SystemVerilogSource,
    TclSource,
    User,
    VerilogSource,
    VhdlSource,
    Vlt,
    Other(String),
}

impl FileType {
    pub fn detect(file_type: &str) -> Self {
        match file_type
            .split_once('-')
            .map(|(name, _)| name)
            .unwrap_or(file_type)
        {
            "cSource" => Self::CSource,
            "cppSource" => Self::CppSource,
            "LPF" => Self::Lpf,
            "PDC" => Self::Pdc,
            "SDC" => Self::Sdc,
            "systemCSource" => Self::SystemCSource,
            "systemVerilogSource" => Self::SystemVerilogSource,
            "tclSource" => Self::TclSource,
            "user" => Self::User,
            "verilogSource" => Self::VerilogSource,
            "vhdlSource" => Self::VhdlSource,
            "vlt" => Self::Vlt,
            _ => Self::Other(file_type.into()),
        }
    }
}
