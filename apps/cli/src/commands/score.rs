use aivss_assessment::{score_document, AssessmentDocument, ScoreReport, ThreatEntry};
use aivss_core::{AxisId, MetricValue, ScoringProfile};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::config::CliConfig;
use crate::core::error::CliError;
use crate::ui;
use crate::utils::loader::load_document;

#[derive(Args, Debug)]
pub struct ScoreCommand {
    /// Assessment document (.json, .toml, .yaml); without it, scores the --set values
    pub file: Option<PathBuf>,

    /// Formula profile for threats that do not name one
    #[arg(long)]
    pub profile: Option<ScoringProfile>,

    /// Metric selection, e.g. `--set attackVector=N --set acm=1.4`
    #[arg(
        long = "set",
        value_name = "AXIS=VALUE",
        value_parser = parse_assignment,
        conflicts_with = "file"
    )]
    pub assignments: Vec<(AxisId, MetricValue)>,

    /// Threat name for a --set assessment
    #[arg(long, conflicts_with = "file")]
    pub name: Option<String>,
}

/// Parses `AXIS=VALUE`, accepting every spelling of the axis name.
pub fn parse_assignment(text: &str) -> std::result::Result<(AxisId, MetricValue), String> {
    let (axis, value) = text
        .split_once('=')
        .ok_or_else(|| CliError::InvalidAssignment(text.to_string()).to_string())?;
    if value.trim().is_empty() {
        return Err(CliError::InvalidAssignment(text.to_string()).to_string());
    }

    let axis = AxisId::parse(axis).map_err(|e| e.to_string())?;
    Ok((axis, MetricValue::parse(value)))
}

impl ScoreCommand {
    /// The threat described on the command line.
    fn inline_threat(&self) -> ThreatEntry {
        let mut entry = ThreatEntry {
            name: self.name.clone(),
            ..ThreatEntry::default()
        };
        for (axis, value) in &self.assignments {
            entry = entry.with_metric(*axis, value.clone());
        }
        entry
    }

    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let profile = self.profile.unwrap_or(config.default_profile);

        let (source, document) = match &self.file {
            Some(path) => {
                let (_, document) = load_document(path)?;
                (Some(path.display().to_string()), document)
            }
            None => (None, AssessmentDocument::single(self.inline_threat())),
        };

        let scores = score_document(&document, profile).map_err(CliError::from)?;
        let report = ScoreReport::new(source, scores);

        ui::emit(config.format, &report, |report| {
            if console::Term::stdout().is_term() {
                ui::beauty::print_header()?;
            }
            ui::report::render_report(report, config.show_recommendations);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("attack_vector=N").unwrap(),
            (AxisId::AttackVector, MetricValue::code("N"))
        );
        assert_eq!(
            parse_assignment("acm = 1.4").unwrap(),
            (AxisId::Acm, MetricValue::Number(1.4))
        );
        assert!(parse_assignment("acm").is_err());
        assert!(parse_assignment("acm=").is_err());
        assert!(parse_assignment("blast=H").is_err());
    }

    #[test]
    fn test_inline_threat() {
        let command = ScoreCommand {
            file: None,
            profile: None,
            assignments: vec![(AxisId::Scope, MetricValue::code("C"))],
            name: Some("Delegation loop".to_string()),
        };
        let entry = command.inline_threat();

        assert_eq!(entry.display_name(), "Delegation loop");
        assert_eq!(entry.metrics.get("scope"), Some(&MetricValue::code("C")));
    }
}
