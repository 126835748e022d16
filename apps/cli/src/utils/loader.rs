use aivss_assessment::{AssessmentDocument, AssessmentError, DocumentFormat};
use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::error::CliError;

/// Loads an assessment document, detecting format by extension.
///
/// The source text is returned too, for diagnostics that point into it.
pub fn load_document(path: &Path) -> Result<(String, AssessmentDocument)> {
    let format = DocumentFormat::from_path(path).map_err(CliError::from)?;
    let content = fs::read_to_string(path).map_err(|source| {
        CliError::from(AssessmentError::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;

    let document = AssessmentDocument::parse(&content, format).map_err(CliError::from)?;
    Ok((content, document))
}
