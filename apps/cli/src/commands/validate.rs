use aivss_assessment::{AssessmentValidator, ValidationLevel};
use aivss_core::ScoringProfile;
use anyhow::Result;
use clap::Args;
use cliclack::{intro, log, outro};
use std::path::PathBuf;

use crate::core::config::{CliConfig, OutputFormat};
use crate::core::error::CliError;
use crate::ui::{self, diagnostic};
use crate::utils::loader::load_document;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Assessment document to check
    pub file: PathBuf,

    /// Formula profile for threats that do not name one
    #[arg(long)]
    pub profile: Option<ScoringProfile>,
}

impl ValidateCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let profile = self.profile.unwrap_or(config.default_profile);
        let (content, document) = load_document(&self.file)?;
        let result = AssessmentValidator::validate(&document, profile);

        if config.format == OutputFormat::Json {
            ui::print_json(&result)?;
        } else {
            let file_name = self.file.display().to_string();
            intro(console::style(format!("Validating {}", file_name)).bold())?;

            for issue in &result.issues {
                let line = format!("{}: {}", issue.field, issue.message);
                match issue.level {
                    ValidationLevel::Error if issue.snippet.is_some() => {
                        diagnostic::report_issue(&file_name, &content, issue);
                    }
                    ValidationLevel::Error => log::error(line)?,
                    ValidationLevel::Warning => log::warning(line)?,
                    ValidationLevel::Info => log::info(line)?,
                }
            }

            let errors = result.count(ValidationLevel::Error);
            let warnings = result.count(ValidationLevel::Warning);
            if errors == 0 {
                outro(format!(
                    "{} threat(s) valid, {} warning(s)",
                    document.threats().len(),
                    warnings
                ))?;
            } else {
                outro(format!("{} error(s), {} warning(s)", errors, warnings))?;
            }
        }

        if result.has_errors() {
            return Err(CliError::ValidationFailed {
                errors: result.count(ValidationLevel::Error),
            }
            .into());
        }
        Ok(())
    }
}
