use aivss_assessment::AssessmentError;
use aivss_core::ScoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("Invalid assignment '{0}': expected AXIS=VALUE")]
    InvalidAssignment(String),

    #[error("Score {0} is outside 0.0 - 10.0")]
    ScoreOutOfRange(f64),

    #[error("No OWASP Agentic AI risk with rank {0}")]
    UnknownRank(u8),

    #[error("Validation failed with {errors} error(s)")]
    ValidationFailed { errors: usize },
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => {
                Some("Check ~/.aivss/config.toml and the AIVSS_* environment variables.".to_string())
            }
            CliError::Assessment(AssessmentError::UnsupportedFormat { .. }) => {
                Some("Use a .json, .toml, .yaml or .yml file.".to_string())
            }
            CliError::Assessment(AssessmentError::Parse { .. }) => {
                Some("Run `aivss schema` to see the accepted document shape.".to_string())
            }
            CliError::Assessment(AssessmentError::Threat { .. }) | CliError::Score(_) => {
                Some("Run `aivss catalog` to list axes, option codes and ranges.".to_string())
            }
            CliError::InvalidAssignment(_) => {
                Some("Example: --set attackVector=N --set acm=1.4".to_string())
            }
            CliError::UnknownRank(_) => Some("Run `aivss risks` to list all ten.".to_string()),
            CliError::ValidationFailed { .. } => {
                Some("Fix the errors above, then run `aivss score`.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aivss_core::AxisId;

    #[test]
    fn test_score_errors_point_at_catalog() {
        let err = CliError::from(ScoreError::MissingAxis { axis: AxisId::Scope });
        assert_eq!(err.to_string(), "scope is required by the composite profile");
        assert!(err.suggestion().unwrap().contains("aivss catalog"));
    }

    #[test]
    fn test_read_failure_names_the_file() {
        let err = CliError::from(AssessmentError::Io {
            path: "threats.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert!(err.to_string().contains("threats.toml"));
        assert!(err.suggestion().is_none());
    }
}
