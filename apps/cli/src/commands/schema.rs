use anyhow::Result;
use clap::Args;

use crate::ui;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    /// Always JSON, whatever `--format` says.
    pub fn execute(&self) -> Result<()> {
        ui::print_json(&aivss_assessment::schema())
    }
}
