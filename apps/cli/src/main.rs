mod commands;
mod core;
mod ui;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::commands::{
    acm::AcmCommand, catalog::CatalogCommand, classify::ClassifyCommand, risks::RisksCommand,
    schema::SchemaCommand, score::ScoreCommand, validate::ValidateCommand,
};
use crate::core::config::{CliConfig, OutputFormat};
use crate::core::error::CliError;
use crate::ui::Theme;

#[derive(Parser)]
#[command(name = "aivss")]
#[command(version, about = "Score agentic AI threats with AIVSS", long_about = None)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file (default: ~/.aivss/config.toml)
    #[arg(long, global = true, env = "AIVSS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment document or a threat given with --set
    Score(ScoreCommand),
    /// Check an assessment document without scoring it
    Validate(ValidateCommand),
    /// Map a score to its risk category
    Classify(ClassifyCommand),
    /// List metric axes and option codes
    Catalog(CatalogCommand),
    /// Show the OWASP Top 10 for Agentic AI
    Risks(RisksCommand),
    /// Show the Agent Characteristics Multiplier bands
    Acm(AcmCommand),
    /// Print the JSON Schema of assessment documents
    Schema(SchemaCommand),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// File, then environment, then flags.
fn resolve_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => CliConfig::default_path().map_err(|e| CliError::Config(format!("{:#}", e)))?,
    };

    let mut config = CliConfig::load(&path).map_err(|e| CliError::Config(format!("{:#}", e)))?;
    config
        .apply_env()
        .map_err(|e| CliError::Config(format!("{:#}", e)))?;

    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    Theme::set_color(config.color);
    ui::diagnostic::install_hook(config.color);
    tracing::debug!(?config, "resolved configuration");

    match &cli.command {
        Commands::Score(cmd) => cmd.execute(&config),
        Commands::Validate(cmd) => cmd.execute(&config),
        Commands::Classify(cmd) => cmd.execute(&config),
        Commands::Catalog(cmd) => cmd.execute(&config),
        Commands::Risks(cmd) => cmd.execute(&config),
        Commands::Acm(cmd) => cmd.execute(&config),
        Commands::Schema(cmd) => cmd.execute(),
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => cli_err.render(),
                None => eprintln!("\n{} {:#}", console::style("Error:").red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}
