use aivss_assessment::ValidationIssue;
use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("{field}: {message}")]
#[diagnostic(
    code(aivss::validation::invalid_metric),
    help("Run `aivss catalog` to list the accepted axes and option codes.")
)]
pub struct MetricDiagnostic {
    pub field: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("rejected here")]
    pub span: SourceSpan,
}

/// Switches miette to plain output when color is off.
pub fn install_hook(color: bool) {
    let _ = miette::set_hook(Box::new(
        move |_: &(dyn Diagnostic + 'static)| -> Box<dyn miette::ReportHandler> {
            Box::new(miette::MietteHandlerOpts::new().color(color).build())
        },
    ));
}

/// Finds the issue's snippet in the source, searching after the last key of the field
/// path first (`threats[1].metrics.acm` looks for `acm`, then the value after it).
pub fn locate(content: &str, issue: &ValidationIssue) -> SourceSpan {
    let Some(snippet) = issue.snippet.as_deref() else {
        return SourceSpan::new(SourceOffset::from(0), 0_usize);
    };

    let key = issue.field.rsplit('.').next().unwrap_or_default();
    let ordinal = threat_index(&issue.field).unwrap_or(0);

    let key_offset = content
        .match_indices(key)
        .map(|(offset, _)| offset)
        .nth(ordinal)
        .or_else(|| content.find(key));

    let offset = key_offset
        .and_then(|start| content[start..].find(snippet).map(|found| start + found))
        .or_else(|| content.find(snippet));

    match offset {
        Some(offset) => SourceSpan::new(offset.into(), snippet.len()),
        None => SourceSpan::new(SourceOffset::from(0), 0_usize),
    }
}

/// `threats[3].metrics.acm` -> `Some(3)`.
fn threat_index(field: &str) -> Option<usize> {
    let rest = field.strip_prefix("threats[")?;
    let end = rest.find(']')?;
    rest[..end].parse().ok()
}

pub fn report_issue(file_path: &str, content: &str, issue: &ValidationIssue) {
    let err = MetricDiagnostic {
        field: issue.field.clone(),
        message: issue.message.clone(),
        src: NamedSource::new(file_path, content.to_string()),
        span: locate(content, issue),
    };

    eprintln!("{:?}", miette::Report::new(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use aivss_assessment::ValidationLevel;

    fn issue(field: &str, snippet: &str) -> ValidationIssue {
        ValidationIssue {
            level: ValidationLevel::Error,
            field: field.to_string(),
            message: "bad".to_string(),
            snippet: Some(snippet.to_string()),
        }
    }

    #[test]
    fn test_locate_value_after_key() {
        let content = "[metrics]\nscope = \"C\"\nattackVector = \"C\"\n";
        let span = locate(content, &issue("metrics.attackVector", "C"));
        let start = span.offset();
        assert_eq!(&content[start..start + span.len()], "C");
        assert!(start > content.find("attackVector").unwrap());
    }

    #[test]
    fn test_locate_in_nth_threat() {
        let content = "[[threats]]\n[threats.metrics]\nacm = 1.5\n\n[[threats]]\n[threats.metrics]\nacm = 2.5\n";
        let span = locate(content, &issue("threats[1].metrics.acm", "2.5"));
        assert_eq!(span.offset(), content.find("2.5").unwrap());
    }

    #[test]
    fn test_missing_snippet_points_at_start() {
        let span = locate("{}", &issue("metrics.blast", "blast"));
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_threat_index() {
        assert_eq!(threat_index("threats[12].metrics.acm"), Some(12));
        assert_eq!(threat_index("metrics.acm"), None);
    }
}
