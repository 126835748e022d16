use aivss_assessment::{
    score_document, AssessmentDocument, AssessmentError, AssessmentValidator, DocumentFormat,
    ScoreReport, ThreatEntry,
};
use aivss_core::reference::AcmBand;
use aivss_core::{AxisId, RiskCategory, ScoreError, ScoringProfile};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const REGISTER_TOML: &str = r#"
[[threats]]
name = "Tool squatting via MCP registry"
owasp_rank = 1
[threats.metrics]
attack_vector = "N"
scope = "C"
privilegesRequired = "L"
aivssSpecificSeverity = 1.0
acm = 2.0
societal = 0.85

[[threats]]
name = "Unreviewed autonomy"
profile = "simple"
[threats.metrics]
agentAutonomy = "H"
dataAccess = "L"
"#;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_score_register() {
    let file = write_temp(".toml", REGISTER_TOML);
    let document = AssessmentDocument::load(file.path()).unwrap();
    assert!(document.is_register());

    let scores = score_document(&document, ScoringProfile::Composite).unwrap();
    assert_eq!(scores.len(), 2);

    let squatting = &scores[0];
    println!("✅ {}: {}", squatting.name, squatting.result.final_score);
    assert_eq!(squatting.profile, ScoringProfile::Composite);
    assert_eq!(squatting.result.final_score, 9.0);
    assert_eq!(squatting.result.risk_category, RiskCategory::Critical);
    assert_eq!(squatting.owasp_name, Some("Agentic AI Tool Misuse"));

    let autonomy = &scores[1];
    assert_eq!(autonomy.profile, ScoringProfile::Simple);
    assert_eq!(autonomy.result.final_score, 5.6);
    assert!(autonomy.acm_band.is_none());

    let report = ScoreReport::new(Some("register.toml".to_string()), scores);
    assert_eq!(report.highest(), RiskCategory::Critical);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["formula_version"], "0.5");
    assert_eq!(json["threats"][0]["result"]["finalScore"], 9.0);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_empty_single_document_scores_defaults() {
    let document = AssessmentDocument::parse("{}", DocumentFormat::Json).unwrap();
    let scores = score_document(&document, ScoringProfile::Composite).unwrap();

    assert_eq!(scores[0].name, "Unnamed Threat");
    assert_eq!(scores[0].result.final_score, 6.5);
    assert_eq!(scores[0].result.risk_category, RiskCategory::Medium);
}

#[test]
fn test_yaml_document() {
    let yaml = r#"
name: Context poisoning
owasp_rank: 6
metrics:
  AV: L
  confidentiality: H
  acm: 1.35
"#;
    let file = write_temp(".yml", yaml);
    let document = AssessmentDocument::load(file.path()).unwrap();
    let scores = score_document(&document, ScoringProfile::Composite).unwrap();

    assert_eq!(scores[0].name, "Context poisoning");
    assert_eq!(scores[0].acm_band.unwrap().range_label(), "1.4-1.5");
}

#[test]
fn test_invalid_threat_reports_index() {
    let document = AssessmentDocument::register(vec![
        ThreatEntry::new("fine"),
        ThreatEntry::new("broken").with_metric(AxisId::Acm, 2.5),
    ]);

    match score_document(&document, ScoringProfile::Composite) {
        Err(AssessmentError::Threat {
            index,
            name,
            source,
        }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "broken");
            assert!(matches!(source, ScoreError::OutOfRangeScalar { .. }));
        }
        other => panic!("expected a threat error, got {other:?}"),
    }
}

#[test]
fn test_empty_register_rejected() {
    let document = AssessmentDocument::parse(r#"{ "threats": [] }"#, DocumentFormat::Json).unwrap();
    assert!(matches!(
        score_document(&document, ScoringProfile::Composite),
        Err(AssessmentError::EmptyRegister)
    ));
}

#[test]
fn test_missing_file() {
    let err = AssessmentDocument::load(std::path::Path::new("/nonexistent/threat.json")).unwrap_err();
    assert!(matches!(err, AssessmentError::Io { .. }));
}

#[test]
fn test_formats_round_trip() {
    let document = AssessmentDocument::parse(REGISTER_TOML, DocumentFormat::Toml).unwrap();

    for format in [DocumentFormat::Json, DocumentFormat::Toml, DocumentFormat::Yaml] {
        let text = document.to_text(format).unwrap();
        let back = AssessmentDocument::parse(&text, format).unwrap();
        assert_eq!(back, document, "{format}");
    }
}

#[test]
fn test_validation_of_loaded_document() {
    let document = AssessmentDocument::parse(REGISTER_TOML, DocumentFormat::Toml).unwrap();
    let result = AssessmentValidator::validate(&document, ScoringProfile::Composite);

    assert!(result.valid, "{:#?}", result.issues);
    assert!(result.has_warnings());
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.field == "threats[1].metrics.humanOversight"));
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.field == "threats[0].metrics.acm"
            && issue.message.contains("Very high")));
}

#[test]
fn test_text_acm_gets_band() {
    let toml = r#"
name = "Delegated tool call"
[metrics]
acm = "1.4"
"#;
    let document = AssessmentDocument::parse(toml, DocumentFormat::Toml).unwrap();

    let scores = score_document(&document, ScoringProfile::Composite).unwrap();
    assert_eq!(scores[0].acm_band, Some(AcmBand::High));

    let result = AssessmentValidator::validate(&document, ScoringProfile::Composite);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.field == "metrics.acm" && issue.message.contains("1.4-1.5")));
}
