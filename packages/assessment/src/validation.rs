use crate::document::{AssessmentDocument, ThreatEntry};
use aivss_core::catalog::{COMPOSITE_AXES, SIMPLE_AXES};
use aivss_core::reference::by_rank;
use aivss_core::{
    AssessmentInput, AxisId, CompositeInput, MetricValue, ScoreError, ScoringProfile, SimpleInput,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
    /// Offending text as written in the document, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    fn push(
        &mut self,
        level: ValidationLevel,
        field: String,
        message: String,
        snippet: Option<String>,
    ) {
        self.issues.push(ValidationIssue {
            level,
            field,
            message,
            snippet,
        });
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.push(ValidationLevel::Error, field.into(), message.into(), None);
    }

    /// Records an error that can be located in the source by `snippet`.
    pub fn add_error_at(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        snippet: impl Into<String>,
    ) {
        self.valid = false;
        self.push(
            ValidationLevel::Error,
            field.into(),
            message.into(),
            Some(snippet.into()),
        );
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationLevel::Warning, field.into(), message.into(), None);
    }

    pub fn add_info(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationLevel::Info, field.into(), message.into(), None);
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }

    pub fn count(&self, level: ValidationLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }

    pub fn issues_at(&self, level: ValidationLevel) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.level == level)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AssessmentValidator;

impl AssessmentValidator {
    pub fn validate(
        document: &AssessmentDocument,
        default_profile: ScoringProfile,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        if document.is_register() && document.threats().is_empty() {
            result.add_error("threats", "The threat register is empty");
            return result;
        }

        for (index, threat) in document.threats().iter().enumerate() {
            let prefix = document.field_prefix(index);
            let profile = threat.effective_profile(default_profile);

            Self::validate_name(threat, &prefix, &mut result);
            Self::validate_owasp_rank(threat, &prefix, &mut result);
            let clean = Self::validate_metrics(threat, profile, &prefix, &mut result);
            Self::validate_coverage(threat, profile, &prefix, &mut result);
            if clean && profile == ScoringProfile::Composite {
                Self::describe_acm(threat, &prefix, &mut result);
            }
        }

        result
    }

    fn validate_name(threat: &ThreatEntry, prefix: &str, result: &mut ValidationResult) {
        match threat.name.as_deref() {
            None => result.add_info(
                format!("{}name", prefix),
                format!("No name given; reported as '{}'", threat.display_name()),
            ),
            Some(name) if name.trim().is_empty() => result.add_warning(
                format!("{}name", prefix),
                "RECOMMENDED: Give the threat a non-empty name",
            ),
            Some(_) => {}
        }
    }

    fn validate_owasp_rank(threat: &ThreatEntry, prefix: &str, result: &mut ValidationResult) {
        let Some(rank) = threat.owasp_rank else {
            return;
        };

        match by_rank(rank) {
            Some(risk) => result.add_info(
                format!("{}owasp_rank", prefix),
                format!("Linked to OWASP Agentic AI #{}: {}", risk.rank, risk.name),
            ),
            None => result.add_error_at(
                format!("{}owasp_rank", prefix),
                format!("OWASP rank {} is outside 1..=10", rank),
                rank.to_string(),
            ),
        }
    }

    /// Returns whether every metric was accepted.
    fn validate_metrics(
        threat: &ThreatEntry,
        profile: ScoringProfile,
        prefix: &str,
        result: &mut ValidationResult,
    ) -> bool {
        let mut clean = true;
        let mut seen: BTreeMap<AxisId, &str> = BTreeMap::new();

        for (key, value) in &threat.metrics {
            let field = format!("{}metrics.{}", prefix, key);

            let axis = match AxisId::parse(key) {
                Ok(axis) => axis,
                Err(err) => {
                    result.add_error_at(field, err.to_string(), key.as_str());
                    clean = false;
                    continue;
                }
            };

            if axis.profile() != profile {
                result.add_error_at(
                    field,
                    format!(
                        "{} belongs to the {} profile, but this threat is scored with the {} profile",
                        axis,
                        axis.profile(),
                        profile
                    ),
                    key.as_str(),
                );
                clean = false;
                continue;
            }

            if let Some(previous) = seen.insert(axis, key.as_str()) {
                result.add_error_at(
                    field,
                    format!("{} is also given as '{}'", axis, previous),
                    key.as_str(),
                );
                clean = false;
                continue;
            }

            if let Err(err) = check_value(axis, value, profile) {
                result.add_error_at(field, err.to_string(), value.to_string());
                clean = false;
            }
        }

        clean
    }

    fn validate_coverage(
        threat: &ThreatEntry,
        profile: ScoringProfile,
        prefix: &str,
        result: &mut ValidationResult,
    ) {
        let answered: Vec<AxisId> = threat
            .metrics
            .keys()
            .filter_map(|key| AxisId::parse(key).ok())
            .collect();

        match profile {
            ScoringProfile::Simple => {
                for axis in SIMPLE_AXES.iter().filter(|axis| !answered.contains(axis)) {
                    result.add_warning(
                        format!("{}metrics.{}", prefix, axis),
                        format!("{} is not answered and is left out of the average", axis.title()),
                    );
                }
            }
            ScoringProfile::Composite => {
                let defaults = AssessmentInput::composite_default();
                for axis in COMPOSITE_AXES.iter().filter(|axis| !answered.contains(axis)) {
                    let default = defaults
                        .get(*axis)
                        .map(|value| value.to_string())
                        .unwrap_or_default();
                    result.add_warning(
                        format!("{}metrics.{}", prefix, axis),
                        format!("{} is not set; using the default {}", axis.title(), default),
                    );
                }
            }
        }
    }

    fn describe_acm(threat: &ThreatEntry, prefix: &str, result: &mut ValidationResult) {
        if let Some(band) = threat.acm_band() {
            result.add_info(
                format!("{}metrics.acm", prefix),
                format!("ACM band: {} ({})", band.description(), band.range_label()),
            );
        }
    }
}

/// Runs one value through the calculator's own input checks. The rest of the trial
/// input is known-good, so any error belongs to `axis`.
fn check_value(
    axis: AxisId,
    value: &MetricValue,
    profile: ScoringProfile,
) -> Result<(), ScoreError> {
    match profile {
        ScoringProfile::Simple => {
            SimpleInput::try_from(&AssessmentInput::new().with(axis, value.clone())).map(|_| ())
        }
        ScoringProfile::Composite => CompositeInput::try_from(
            &AssessmentInput::composite_default().with(axis, value.clone()),
        )
        .map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;

    fn issue<'a>(result: &'a ValidationResult, field: &str) -> &'a ValidationIssue {
        result
            .issues
            .iter()
            .find(|i| i.field == field)
            .unwrap_or_else(|| panic!("no issue at {field}: {:#?}", result.issues))
    }

    #[test]
    fn test_unknown_code_located() {
        let document = AssessmentDocument::parse(
            r#"
[[threats]]
name = "Memory poisoning"
[threats.metrics]
attackVector = "Q"
"#,
            DocumentFormat::Toml,
        )
        .unwrap();
        let result = AssessmentValidator::validate(&document, ScoringProfile::Composite);

        assert!(!result.valid);
        let found = issue(&result, "threats[0].metrics.attackVector");
        assert_eq!(found.level, ValidationLevel::Error);
        assert_eq!(found.snippet.as_deref(), Some("Q"));
    }

    #[test]
    fn test_profile_mismatch_is_error() {
        let document = AssessmentDocument::single(
            ThreatEntry::new("x").with_metric(AxisId::HumanOversight, "H"),
        );
        let result = AssessmentValidator::validate(&document, ScoringProfile::Composite);
        assert_eq!(issue(&result, "metrics.humanOversight").level, ValidationLevel::Error);
    }

    #[test]
    fn test_alias_duplicate_is_error() {
        let mut entry = ThreatEntry::new("x");
        entry.metrics.insert("AV".to_string(), MetricValue::code("N"));
        entry.metrics.insert("attackVector".to_string(), MetricValue::code("L"));
        let result = AssessmentValidator::validate(
            &AssessmentDocument::single(entry),
            ScoringProfile::Composite,
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_simple_coverage_warnings() {
        let document = AssessmentDocument::single(
            ThreatEntry::new("x")
                .with_metric(AxisId::AgentAutonomy, "H")
                .with_metric(AxisId::DataAccess, "M"),
        );
        let result = AssessmentValidator::validate(&document, ScoringProfile::Simple);

        assert!(result.valid);
        assert_eq!(result.count(ValidationLevel::Warning), 6);
        assert_eq!(result.count(ValidationLevel::Info), 0);
    }

    #[test]
    fn test_composite_defaults_and_acm_band() {
        let document = AssessmentDocument::single(
            ThreatEntry::new("x").with_metric(AxisId::Acm, 1.4),
        );
        let result = AssessmentValidator::validate(&document, ScoringProfile::Composite);

        assert!(result.valid);
        assert_eq!(result.count(ValidationLevel::Warning), 10);
        let info = issue(&result, "metrics.acm");
        assert_eq!(info.level, ValidationLevel::Info);
        assert!(info.message.contains("High characteristics"), "{}", info.message);
    }

    #[test]
    fn test_owasp_rank_bounds() {
        let mut entry = ThreatEntry::new("x");
        entry.owasp_rank = Some(11);
        let result = AssessmentValidator::validate(
            &AssessmentDocument::single(entry),
            ScoringProfile::Simple,
        );
        assert_eq!(issue(&result, "owasp_rank").level, ValidationLevel::Error);
    }

    #[test]
    fn test_empty_register() {
        let result = AssessmentValidator::validate(
            &AssessmentDocument::register(Vec::new()),
            ScoringProfile::Composite,
        );
        assert!(!result.valid);
        assert_eq!(issue(&result, "threats").level, ValidationLevel::Error);
    }
}
