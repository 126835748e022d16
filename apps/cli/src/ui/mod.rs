pub mod beauty;
pub mod diagnostic;
pub mod report;
pub mod theme;

pub use theme::{Icon, Theme};

use crate::core::config::OutputFormat;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

/// A table in the CLI's house style.
pub fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if Theme::color_enabled() { UTF8_FULL } else { ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints `value` as JSON, or runs `text` for the terminal rendering.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Text => text(value),
    }
}
