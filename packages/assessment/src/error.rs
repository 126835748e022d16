use crate::document::DocumentFormat;
use aivss_core::ScoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} assessment: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },

    #[error("Failed to write assessment as {format}: {message}")]
    Render {
        format: DocumentFormat,
        message: String,
    },

    #[error("Unsupported assessment format '{}' (expected .json, .toml, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("The threat register is empty")]
    EmptyRegister,

    #[error("Threat #{} '{name}': {source}", index + 1)]
    Threat {
        index: usize,
        name: String,
        #[source]
        source: ScoreError,
    },
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
