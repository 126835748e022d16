use super::Theme;
use aivss_core::FORMULA_VERSION;
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use std::io::{stdout, Result};

pub fn print_header() -> Result<()> {
    let mut stdout = stdout();
    let color = Theme::color_enabled();
    if color {
        stdout.execute(SetForegroundColor(Color::Cyan))?;
    }
    println!("    _   _____   ______ ____ ");
    println!("   /_\\ |_ _\\ \\ / / __/ __|");
    println!("  / _ \\ | | \\ V /\\__ \\__ \\");
    println!(" /_/ \\_\\___| \\_/ |___/___/");
    println!("   AI Vulnerability Scoring System v{}", FORMULA_VERSION);
    if color {
        stdout.execute(ResetColor)?;
    }
    println!();
    Ok(())
}
