use crate::catalog::AxisId;
use thiserror::Error;

/// Input rejected by the catalogue or a calculator.
///
/// None of these are recovered from inside the engine: an unknown code or a scalar
/// outside its interval is never silently defaulted or clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Unknown option code '{code}' for {axis}")]
    UnknownOptionCode { axis: AxisId, code: String },

    #[error("{axis} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRangeScalar {
        axis: AxisId,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{axis} is required by the composite profile")]
    MissingAxis { axis: AxisId },

    #[error("Unknown metric axis '{name}'")]
    UnknownAxis { name: String },

    #[error("Unknown scoring profile '{name}' (expected 'simple' or 'composite')")]
    UnknownProfile { name: String },
}

impl ScoreError {
    /// The axis the error refers to, when it refers to a known one.
    pub fn axis(&self) -> Option<AxisId> {
        match self {
            ScoreError::UnknownOptionCode { axis, .. }
            | ScoreError::OutOfRangeScalar { axis, .. }
            | ScoreError::MissingAxis { axis } => Some(*axis),
            ScoreError::UnknownAxis { .. } | ScoreError::UnknownProfile { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
