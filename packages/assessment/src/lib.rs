//! Assessment documents for the AIVSS engine: one threat or a register of threats,
//! written as JSON, TOML or YAML.

pub mod document;
pub mod error;
pub mod report;
pub mod schema;
pub mod validation;

pub use document::{AssessmentDocument, DocumentFormat, DocumentRepr, ThreatEntry};
pub use error::AssessmentError;
pub use report::{score_document, ScoreReport, ThreatScore};
pub use schema::schema;
pub use validation::{AssessmentValidator, ValidationIssue, ValidationLevel, ValidationResult};
