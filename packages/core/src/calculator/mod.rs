pub mod composite;
pub mod simple;

pub use composite::{compute_composite_score, Acm, CompositeInput, SpecificSeverity};
pub use simple::{compute_simple_score, SimpleInput};

use crate::classifier::RiskCategory;
use crate::error::{Result, ScoreError};
use crate::input::AssessmentInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Revision of the AIVSS methodology implemented by the composite profile.
pub const FORMULA_VERSION: &str = "0.5";

pub const MAX_SCORE: f64 = 10.0;

/// Formula variant used to turn an assessment into a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Mean of the answered axes of the eight-axis catalogue.
    Simple,
    /// Weighted CVSS base, agentic and impact components.
    #[default]
    Composite,
}

impl ScoringProfile {
    pub const ALL: [ScoringProfile; 2] = [ScoringProfile::Simple, ScoringProfile::Composite];

    pub fn compute(self, input: &AssessmentInput) -> Result<ScoreResult> {
        match self {
            ScoringProfile::Simple => compute_simple_score(input),
            ScoringProfile::Composite => compute_composite_score(input),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringProfile::Simple => "simple",
            ScoringProfile::Composite => "composite",
        }
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringProfile {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "a" => Ok(ScoringProfile::Simple),
            "composite" | "cvss" | "b" => Ok(ScoringProfile::Composite),
            _ => Err(ScoreError::UnknownProfile {
                name: s.to_string(),
            }),
        }
    }
}

/// Decomposition of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub exploitability: f64,
    pub impact: f64,
    pub cvss_base: f64,
    pub agentic_component: f64,
    pub overall_impact: f64,
    pub weighted_cvss: f64,
    pub weighted_agentic: f64,
    pub weighted_impact: f64,
}

/// Outcome of one computation. Each input change produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub profile: ScoringProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<SubScores>,
    pub final_score: f64,
    pub risk_category: RiskCategory,
}

impl ScoreResult {
    pub(crate) fn new(profile: ScoringProfile, final_score: f64, sub_scores: Option<SubScores>) -> Self {
        Self {
            profile,
            sub_scores,
            final_score,
            risk_category: RiskCategory::classify(final_score),
        }
    }
}

/// Half-up rounding to `decimals` places. All engine values are non-negative, where
/// `f64::round` (half away from zero) is half-up.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
