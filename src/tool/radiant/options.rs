use crate::{ir::ToolOptions, tool::ToolError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiantOptions {
    part: String,
}

impl RadiantOptions {
    pub fn new(options: &ToolOptions) -> Result<Self, ToolError> {
        Ok(Self {
            part: options
                .scalar("part")
                .ok_or(ToolError::MissingOption("part"))?
                .into(),
        })
    }

    /// Returns an FPGA part number (e.g. `LIFCL-40-9BG400C`).
    pub fn part(&self) -> &str {
        &self.part
    }
}
