//! AIVSS scoring engine: metric catalogue, the two score calculators and the risk
//! classifier. Everything in this crate is pure and synchronous.

pub mod calculator;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod input;
pub mod reference;

pub use calculator::composite::{
    MITIGATION_MULTIPLIER, TEMPORAL_MULTIPLIER, WEIGHT_AGENTIC, WEIGHT_CVSS_BASE, WEIGHT_IMPACT,
};
pub use calculator::{
    compute_composite_score, compute_simple_score, CompositeInput, ScoreResult, ScoringProfile,
    SimpleInput, SubScores, FORMULA_VERSION, MAX_SCORE,
};
pub use catalog::{axes, lookup, options, AxisId, AxisKind, MetricOption};
pub use classifier::RiskCategory;
pub use error::ScoreError;
pub use input::{AssessmentInput, MetricValue, DEFAULT_THREAT_NAME};
