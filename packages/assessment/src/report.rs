use crate::document::AssessmentDocument;
use crate::error::{AssessmentError, Result};
use aivss_core::reference::{by_rank, AcmBand};
use aivss_core::{RiskCategory, ScoreResult, ScoringProfile, FORMULA_VERSION};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Score of one threat of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatScore {
    pub index: usize,
    pub name: String,
    pub profile: ScoringProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owasp_rank: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owasp_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acm_band: Option<AcmBand>,
    pub result: ScoreResult,
}

/// Scores every threat in order. The first invalid threat aborts the run.
pub fn score_document(
    document: &AssessmentDocument,
    default_profile: ScoringProfile,
) -> Result<Vec<ThreatScore>> {
    if document.is_register() && document.threats().is_empty() {
        return Err(AssessmentError::EmptyRegister);
    }

    document
        .threats()
        .iter()
        .enumerate()
        .map(|(index, threat)| {
            let profile = threat.effective_profile(default_profile);
            let fail = |source| AssessmentError::Threat {
                index,
                name: threat.display_name().to_string(),
                source,
            };

            let input = threat.to_input(profile).map_err(fail)?;
            let result = profile.compute(&input).map_err(fail)?;
            debug!(
                index,
                name = threat.display_name(),
                %profile,
                score = result.final_score,
                "scored threat"
            );

            let acm_band = match profile {
                ScoringProfile::Composite => threat.acm_band(),
                ScoringProfile::Simple => None,
            };

            Ok(ThreatScore {
                index,
                name: threat.display_name().to_string(),
                profile,
                owasp_rank: threat.owasp_rank,
                owasp_name: threat.owasp_rank.and_then(by_rank).map(|risk| risk.name),
                acm_band,
                result,
            })
        })
        .collect()
}

/// Machine-readable output of a scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub formula_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub threats: Vec<ThreatScore>,
}

impl ScoreReport {
    pub fn new(source: Option<String>, threats: Vec<ThreatScore>) -> Self {
        Self {
            generated_at: Utc::now(),
            formula_version: FORMULA_VERSION,
            source,
            threats,
        }
    }

    /// Most severe category in the report.
    pub fn highest(&self) -> RiskCategory {
        self.threats
            .iter()
            .map(|threat| threat.result.risk_category)
            .max()
            .unwrap_or(RiskCategory::None)
    }
}
