//! CVSS-composite profile (AIVSS v0.5).
//!
//! ```text
//! AIVSS = min(10, [(w1 x CVSS Base) + (w2 x Agentic) + (w3 x Impact)] x Temporal x Mitigation)
//! ```
//!
//! The CVSS base follows the v3.1 base equations. The agentic component is the
//! threat-specific severity amplified by the Agent Characteristics Multiplier, and the
//! impact component averages the confidentiality, integrity, availability and societal
//! impacts.

use super::{round_to, ScoreResult, ScoringProfile, SubScores, MAX_SCORE};
use crate::catalog::cvss::{
    AttackComplexity, AttackVector, ImpactLevel, PrivilegesRequired, Scope, SocietalImpact,
    UserInteraction,
};
use crate::catalog::{AxisId, AxisKind};
use crate::error::{Result, ScoreError};
use crate::input::{AssessmentInput, MetricValue};
use tracing::{debug, trace};

pub const WEIGHT_CVSS_BASE: f64 = 0.2;
pub const WEIGHT_AGENTIC: f64 = 0.6;
pub const WEIGHT_IMPACT: f64 = 0.2;

/// Fixed in this formula revision.
pub const TEMPORAL_MULTIPLIER: f64 = 0.97;
pub const MITIGATION_MULTIPLIER: f64 = 1.0;

pub const EXPLOITABILITY_COEFFICIENT: f64 = 8.22;
pub const CHANGED_SCOPE_FACTOR: f64 = 1.08;

/// CVSS v3.1 privileges-required values when the scope is changed.
pub const SCOPE_CHANGED_PR_LOW: f64 = 0.68;
pub const SCOPE_CHANGED_PR_HIGH: f64 = 0.50;

fn check_scalar(axis: AxisId, value: f64) -> Result<f64> {
    let (min, max) = match axis.kind() {
        AxisKind::Scalar { min, max } => (min, max),
        AxisKind::Categorical => (f64::NEG_INFINITY, f64::INFINITY),
    };
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(ScoreError::OutOfRangeScalar {
            axis,
            value,
            min,
            max,
        })
    }
}

/// Threat-specific severity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SpecificSeverity(f64);

impl SpecificSeverity {
    pub fn new(value: f64) -> Result<Self> {
        check_scalar(AxisId::AivssSpecificSeverity, value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Agent Characteristics Multiplier in `[1.0, 2.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Acm(f64);

impl Acm {
    pub fn new(value: f64) -> Result<Self> {
        check_scalar(AxisId::Acm, value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A fully specified, validated composite assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeInput {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,
    pub confidentiality: ImpactLevel,
    pub integrity: ImpactLevel,
    pub availability: ImpactLevel,
    pub societal: SocietalImpact,
    pub specific_severity: SpecificSeverity,
    pub acm: Acm,
}

impl CompositeInput {
    /// Privileges-required weight, with the scope-changed override for `L` and `H`.
    pub fn privileges_score(&self) -> f64 {
        match (self.scope, self.privileges_required) {
            (Scope::Changed, PrivilegesRequired::Low) => SCOPE_CHANGED_PR_LOW,
            (Scope::Changed, PrivilegesRequired::High) => SCOPE_CHANGED_PR_HIGH,
            (_, privileges) => privileges.score(),
        }
    }

    pub fn exploitability(&self) -> f64 {
        EXPLOITABILITY_COEFFICIENT
            * self.attack_vector.score()
            * self.attack_complexity.score()
            * self.privileges_score()
            * self.user_interaction.score()
    }

    /// Combined confidentiality/integrity/availability term. Societal impact is not part
    /// of it.
    pub fn isc_base(&self) -> f64 {
        1.0 - (1.0 - self.confidentiality.score())
            * (1.0 - self.integrity.score())
            * (1.0 - self.availability.score())
    }

    pub fn impact(&self) -> f64 {
        let isc = self.isc_base();
        let impact = match self.scope {
            Scope::Unchanged => self.scope.score() * isc,
            Scope::Changed => {
                self.scope.score() * (isc - 0.029) - 3.25 * (isc - 0.02).max(0.0).powi(15)
            }
        };
        impact.max(0.0)
    }

    /// CVSS base score, rounded to one decimal.
    pub fn cvss_base(&self) -> f64 {
        let exploitability = self.exploitability();
        let impact = self.impact();
        if impact <= 0.0 {
            return 0.0;
        }
        let base = match self.scope {
            Scope::Unchanged => (exploitability + impact).min(MAX_SCORE),
            Scope::Changed => (CHANGED_SCOPE_FACTOR * (exploitability + impact)).min(MAX_SCORE),
        };
        round_to(base, 1)
    }

    pub fn agentic_component(&self) -> f64 {
        (self.specific_severity.value() * 10.0 * self.acm.value()).min(MAX_SCORE)
    }

    /// Mean of the four impact values on a 0-10 scale, rounded to one decimal.
    pub fn overall_impact(&self) -> f64 {
        let sum = self.confidentiality.score()
            + self.integrity.score()
            + self.availability.score()
            + self.societal.score();
        round_to(((sum / 4.0) * 10.0).min(MAX_SCORE), 1)
    }

    pub fn sub_scores(&self) -> SubScores {
        let cvss_base = self.cvss_base();
        let agentic_component = self.agentic_component();
        let overall_impact = self.overall_impact();

        SubScores {
            exploitability: self.exploitability(),
            impact: self.impact(),
            cvss_base,
            agentic_component,
            overall_impact,
            weighted_cvss: round_to(WEIGHT_CVSS_BASE * cvss_base, 2),
            weighted_agentic: round_to(WEIGHT_AGENTIC * agentic_component, 2),
            weighted_impact: round_to(WEIGHT_IMPACT * overall_impact, 2),
        }
    }

    pub fn score(&self) -> ScoreResult {
        let sub = self.sub_scores();

        // Weighted terms are rounded for display only; the composite uses full precision.
        let raw = (WEIGHT_CVSS_BASE * sub.cvss_base
            + WEIGHT_AGENTIC * sub.agentic_component
            + WEIGHT_IMPACT * sub.overall_impact)
            * TEMPORAL_MULTIPLIER
            * MITIGATION_MULTIPLIER;
        let final_score = round_to(raw, 1).min(MAX_SCORE);

        trace!(
            exploitability = sub.exploitability,
            impact = sub.impact,
            cvss_base = sub.cvss_base,
            agentic = sub.agentic_component,
            overall_impact = sub.overall_impact,
            raw,
            final_score,
            "composite score"
        );
        ScoreResult::new(ScoringProfile::Composite, final_score, Some(sub))
    }
}

fn required(input: &AssessmentInput, axis: AxisId) -> Result<&MetricValue> {
    input.get(axis).ok_or(ScoreError::MissingAxis { axis })
}

fn categorical<T>(
    input: &AssessmentInput,
    axis: AxisId,
    from_code: fn(&str) -> Option<T>,
) -> Result<T> {
    let code = match required(input, axis)? {
        MetricValue::Code(code) => code.clone(),
        MetricValue::Number(number) => number.to_string(),
    };
    from_code(&code).ok_or(ScoreError::UnknownOptionCode { axis, code })
}

/// Impact axes accept either the option code or the option's numeric value.
fn impact_level<T>(
    input: &AssessmentInput,
    axis: AxisId,
    from_code: fn(&str) -> Option<T>,
    from_value: fn(f64) -> Option<T>,
    max: f64,
) -> Result<T> {
    match required(input, axis)? {
        MetricValue::Code(code) => from_code(code).ok_or_else(|| ScoreError::UnknownOptionCode {
            axis,
            code: code.clone(),
        }),
        MetricValue::Number(value) => from_value(*value).ok_or(ScoreError::OutOfRangeScalar {
            axis,
            value: *value,
            min: 0.0,
            max,
        }),
    }
}

fn scalar(input: &AssessmentInput, axis: AxisId) -> Result<f64> {
    match required(input, axis)? {
        MetricValue::Number(value) => Ok(*value),
        MetricValue::Code(code) => {
            code.trim()
                .parse::<f64>()
                .map_err(|_| ScoreError::UnknownOptionCode {
                    axis,
                    code: code.clone(),
                })
        }
    }
}

impl TryFrom<&AssessmentInput> for CompositeInput {
    type Error = ScoreError;

    fn try_from(input: &AssessmentInput) -> Result<Self> {
        if let Some((axis, _)) = input
            .answered()
            .find(|(axis, _)| axis.profile() != ScoringProfile::Composite)
        {
            return Err(ScoreError::UnknownAxis {
                name: axis.name().to_string(),
            });
        }

        Ok(CompositeInput {
            attack_vector: categorical(input, AxisId::AttackVector, AttackVector::from_code)?,
            attack_complexity: categorical(
                input,
                AxisId::AttackComplexity,
                AttackComplexity::from_code,
            )?,
            privileges_required: categorical(
                input,
                AxisId::PrivilegesRequired,
                PrivilegesRequired::from_code,
            )?,
            user_interaction: categorical(
                input,
                AxisId::UserInteraction,
                UserInteraction::from_code,
            )?,
            scope: categorical(input, AxisId::Scope, Scope::from_code)?,
            confidentiality: impact_level(
                input,
                AxisId::Confidentiality,
                ImpactLevel::from_code,
                ImpactLevel::from_value,
                ImpactLevel::High.score(),
            )?,
            integrity: impact_level(
                input,
                AxisId::Integrity,
                ImpactLevel::from_code,
                ImpactLevel::from_value,
                ImpactLevel::High.score(),
            )?,
            availability: impact_level(
                input,
                AxisId::Availability,
                ImpactLevel::from_code,
                ImpactLevel::from_value,
                ImpactLevel::High.score(),
            )?,
            societal: impact_level(
                input,
                AxisId::Societal,
                SocietalImpact::from_code,
                SocietalImpact::from_value,
                SocietalImpact::High.score(),
            )?,
            specific_severity: SpecificSeverity::new(scalar(
                input,
                AxisId::AivssSpecificSeverity,
            )?)?,
            acm: Acm::new(scalar(input, AxisId::Acm)?)?,
        })
    }
}

/// Scores a complete composite-profile assessment. Missing axes are errors; merge over
/// [`AssessmentInput::composite_default`] first to fill them.
pub fn compute_composite_score(input: &AssessmentInput) -> Result<ScoreResult> {
    let composite = CompositeInput::try_from(input).map_err(|err| {
        debug!(error = %err, "rejected composite-profile input");
        err
    })?;
    Ok(composite.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_input() -> CompositeInput {
        CompositeInput::try_from(&AssessmentInput::composite_default()).unwrap()
    }

    #[test]
    fn test_default_sub_scores() {
        let input = default_input();
        assert!((input.exploitability() - 3.887).abs() < 1e-3);
        assert!((input.isc_base() - 0.914816).abs() < 1e-9);
        assert!((input.impact() - 5.873).abs() < 1e-3);
        assert_eq!(input.cvss_base(), 9.8);
        assert_eq!(input.agentic_component(), 6.0);
        assert_eq!(input.overall_impact(), 5.6);
    }

    #[test]
    fn test_scope_changed_privileges_override() {
        let mut input = default_input();
        input.scope = Scope::Changed;
        input.privileges_required = PrivilegesRequired::Low;
        assert_eq!(input.privileges_score(), 0.68);

        input.privileges_required = PrivilegesRequired::High;
        assert_eq!(input.privileges_score(), 0.50);

        input.privileges_required = PrivilegesRequired::None;
        assert_eq!(input.privileges_score(), 0.85);

        input.scope = Scope::Unchanged;
        input.privileges_required = PrivilegesRequired::Low;
        assert_eq!(input.privileges_score(), 0.62);
    }

    #[test]
    fn test_no_impact_zeroes_cvss_base() {
        let mut input = default_input();
        input.confidentiality = ImpactLevel::None;
        input.integrity = ImpactLevel::None;
        input.availability = ImpactLevel::None;
        assert_eq!(input.impact(), 0.0);
        assert_eq!(input.cvss_base(), 0.0);
    }

    #[test]
    fn test_scalar_ranges() {
        assert!(SpecificSeverity::new(0.0).is_ok());
        assert!(SpecificSeverity::new(1.0).is_ok());
        assert!(SpecificSeverity::new(1.01).is_err());
        assert!(SpecificSeverity::new(f64::NAN).is_err());
        assert!(Acm::new(1.0).is_ok());
        assert!(Acm::new(2.0).is_ok());
        assert!(matches!(
            Acm::new(0.9),
            Err(ScoreError::OutOfRangeScalar {
                axis: AxisId::Acm,
                min,
                max,
                ..
            }) if min == 1.0 && max == 2.0
        ));
    }

    #[test]
    fn test_missing_axis() {
        let mut input = AssessmentInput::composite_default();
        input.clear(AxisId::Scope);
        assert_eq!(
            CompositeInput::try_from(&input).unwrap_err(),
            ScoreError::MissingAxis {
                axis: AxisId::Scope
            }
        );
    }

    #[test]
    fn test_impact_accepts_codes() {
        let input = AssessmentInput::composite_default()
            .with(AxisId::Confidentiality, "L")
            .with(AxisId::Societal, "h");
        let parsed = CompositeInput::try_from(&input).unwrap();
        assert_eq!(parsed.confidentiality, ImpactLevel::Low);
        assert_eq!(parsed.societal, SocietalImpact::High);
    }

    #[test]
    fn test_impact_value_outside_enumeration() {
        let input = AssessmentInput::composite_default().with(AxisId::Integrity, 0.3);
        assert!(matches!(
            CompositeInput::try_from(&input),
            Err(ScoreError::OutOfRangeScalar {
                axis: AxisId::Integrity,
                ..
            })
        ));
    }

    #[test]
    fn test_simple_axis_rejected() {
        let input = AssessmentInput::composite_default().with(AxisId::AgentAutonomy, "H");
        assert!(matches!(
            CompositeInput::try_from(&input),
            Err(ScoreError::UnknownAxis { .. })
        ));
    }
}
