use aivss_core::catalog::SIMPLE_AXES;
use aivss_core::{
    compute_composite_score, compute_simple_score, lookup, options, AssessmentInput, AxisId,
    CompositeInput, RiskCategory, ScoreError, ScoringProfile,
};
use pretty_assertions::assert_eq;

fn composite(
    vector: [&str; 5],
    cia: [f64; 3],
    societal: f64,
    severity: f64,
    acm: f64,
) -> AssessmentInput {
    AssessmentInput::new()
        .with(AxisId::AttackVector, vector[0])
        .with(AxisId::AttackComplexity, vector[1])
        .with(AxisId::PrivilegesRequired, vector[2])
        .with(AxisId::UserInteraction, vector[3])
        .with(AxisId::Scope, vector[4])
        .with(AxisId::Confidentiality, cia[0])
        .with(AxisId::Integrity, cia[1])
        .with(AxisId::Availability, cia[2])
        .with(AxisId::Societal, societal)
        .with(AxisId::AivssSpecificSeverity, severity)
        .with(AxisId::Acm, acm)
}

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn test_default_composite_fixture() {
    let result = compute_composite_score(&AssessmentInput::composite_default()).unwrap();
    let sub = result.sub_scores.unwrap();

    println!("✅ default assessment: {} ({})", result.final_score, result.risk_category);
    assert_eq!(sub.cvss_base, 9.8);
    assert_eq!(sub.agentic_component, 6.0);
    assert_eq!(sub.overall_impact, 5.6);
    assert_eq!(sub.weighted_cvss, 1.96);
    assert_eq!(sub.weighted_agentic, 3.6);
    assert_eq!(sub.weighted_impact, 1.12);
    assert_eq!(result.final_score, 6.5);
    assert_eq!(result.risk_category, RiskCategory::Medium);
    assert_eq!(result.profile, ScoringProfile::Composite);
}

#[test]
fn test_changed_scope_critical() {
    let input = composite(["N", "L", "L", "N", "C"], [0.56; 3], 0.85, 1.0, 2.0);
    let result = compute_composite_score(&input).unwrap();
    let sub = result.sub_scores.unwrap();

    assert_eq!(sub.cvss_base, 9.9);
    assert_eq!(sub.agentic_component, 10.0);
    assert_eq!(sub.overall_impact, 6.3);
    assert_eq!(result.final_score, 9.0);
    assert_eq!(result.risk_category, RiskCategory::Critical);
}

#[test]
fn test_changed_scope_uses_adjusted_privileges() {
    let input = composite(["N", "L", "L", "N", "C"], [0.56; 3], 0.55, 0.5, 1.2);
    let typed = CompositeInput::try_from(&input).unwrap();
    assert_eq!(typed.privileges_score(), 0.68);

    let result = typed.score();
    assert_eq!(result.sub_scores.unwrap().cvss_base, 9.9);
    assert_eq!(result.final_score, 6.5);
}

#[test]
fn test_no_impact_scores_none() {
    let input = composite(["N", "L", "N", "N", "U"], [0.0; 3], 0.0, 0.0, 1.0);
    let result = compute_composite_score(&input).unwrap();

    assert_eq!(result.sub_scores.unwrap().cvss_base, 0.0);
    assert_eq!(result.final_score, 0.0);
    assert_eq!(result.risk_category, RiskCategory::None);
}

#[test]
fn test_low_medium_boundary() {
    let low = composite(["N", "L", "H", "N", "C"], [0.22, 0.22, 0.0], 0.0, 0.3, 1.5);
    let result = compute_composite_score(&low).unwrap();
    assert_eq!(result.sub_scores.unwrap().cvss_base, 5.4);
    assert_eq!(result.final_score, 3.9);
    assert_eq!(result.risk_category, RiskCategory::Low);

    let medium = composite(["N", "L", "H", "N", "C"], [0.22, 0.22, 0.0], 0.22, 0.3, 1.5);
    let result = compute_composite_score(&medium).unwrap();
    assert_eq!(result.sub_scores.unwrap().overall_impact, 1.7);
    assert_eq!(result.final_score, 4.0);
    assert_eq!(result.risk_category, RiskCategory::Medium);
}

#[test]
fn test_adjacent_network_mix() {
    let input = composite(["A", "L", "L", "R", "U"], [0.22, 0.56, 0.0], 0.22, 0.4, 1.4);
    let result = compute_composite_score(&input).unwrap();
    let sub = result.sub_scores.unwrap();

    assert_eq!(sub.cvss_base, 5.7);
    assert!(approx(sub.agentic_component, 5.6));
    assert_eq!(sub.overall_impact, 2.5);
    assert_eq!(result.final_score, 4.9);
}

#[test]
fn test_composite_is_idempotent() {
    let input = composite(["N", "H", "L", "R", "C"], [0.22, 0.56, 0.22], 0.55, 0.7, 1.7);
    let first = compute_composite_score(&input).unwrap();
    let second = compute_composite_score(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_agentic_component_monotonic_in_acm() {
    let mut previous = 0.0;
    for step in 0..=20 {
        let acm = 1.0 + f64::from(step) * 0.05;
        let input = AssessmentInput::composite_default().with(AxisId::Acm, acm.min(2.0));
        let agentic = compute_composite_score(&input)
            .unwrap()
            .sub_scores
            .unwrap()
            .agentic_component;
        assert!(agentic >= previous, "acm {acm}: {agentic} < {previous}");
        assert!(agentic <= 10.0);
        previous = agentic;
    }
}

#[test]
fn test_final_score_stays_in_range() {
    let vectors = [
        ["N", "L", "N", "N", "U"],
        ["N", "L", "N", "N", "C"],
        ["P", "H", "H", "R", "U"],
        ["L", "H", "L", "R", "C"],
    ];
    for vector in vectors {
        for impact in [0.0, 0.22, 0.56] {
            for societal in [0.0, 0.22, 0.55, 0.85] {
                for (severity, acm) in [(0.0, 1.0), (0.5, 1.2), (1.0, 2.0)] {
                    let input = composite(vector, [impact; 3], societal, severity, acm);
                    let result = compute_composite_score(&input).unwrap();
                    assert!(
                        (0.0..=10.0).contains(&result.final_score),
                        "{vector:?}: {}",
                        result.final_score
                    );
                    assert_eq!(
                        result.risk_category,
                        RiskCategory::classify(result.final_score)
                    );
                }
            }
        }
    }
}

#[test]
fn test_composite_rejects_instead_of_defaulting() {
    let mut missing = AssessmentInput::composite_default();
    missing.clear(AxisId::Acm);
    assert_eq!(
        compute_composite_score(&missing).unwrap_err(),
        ScoreError::MissingAxis { axis: AxisId::Acm }
    );

    let unknown_code = AssessmentInput::composite_default().with(AxisId::AttackVector, "X");
    assert_eq!(
        compute_composite_score(&unknown_code).unwrap_err(),
        ScoreError::UnknownOptionCode {
            axis: AxisId::AttackVector,
            code: "X".to_string()
        }
    );

    let severity = AssessmentInput::composite_default().with(AxisId::AivssSpecificSeverity, 1.5);
    assert!(matches!(
        compute_composite_score(&severity),
        Err(ScoreError::OutOfRangeScalar {
            axis: AxisId::AivssSpecificSeverity,
            ..
        })
    ));
}

#[test]
fn test_simple_fixtures() {
    let all_high = SIMPLE_AXES
        .iter()
        .fold(AssessmentInput::new(), |input, axis| input.with(*axis, "H"));
    let result = compute_simple_score(&all_high).unwrap();
    println!("✅ all high: {}", result.final_score);
    assert_eq!(result.final_score, 8.5);
    assert_eq!(result.risk_category, RiskCategory::High);

    let all_low = SIMPLE_AXES
        .iter()
        .fold(AssessmentInput::new(), |input, axis| input.with(*axis, "l"));
    let result = compute_simple_score(&all_low).unwrap();
    assert_eq!(result.final_score, 2.7);
    assert_eq!(result.risk_category, RiskCategory::Low);

    let empty = compute_simple_score(&AssessmentInput::new()).unwrap();
    assert_eq!(empty.final_score, 0.0);
    assert_eq!(empty.risk_category, RiskCategory::None);
}

#[test]
fn test_simple_score_uses_catalog_weights() {
    for axis in SIMPLE_AXES {
        for option in options(axis) {
            let input = AssessmentInput::new().with(axis, option.code);
            let result = compute_simple_score(&input).unwrap();
            assert_eq!(
                result.final_score,
                (option.score * 100.0).round() / 10.0,
                "{axis}={}",
                option.code
            );
        }
    }

    let oversight = AssessmentInput::new().with(AxisId::HumanOversight, "H");
    assert_eq!(lookup(AxisId::HumanOversight, "H").unwrap().score, 0.85);
    assert_eq!(compute_simple_score(&oversight).unwrap().final_score, 8.5);
}

#[test]
fn test_simple_mixed_levels() {
    let input = AssessmentInput::new()
        .with(AxisId::AgentAutonomy, "H")
        .with(AxisId::HumanOversight, "M")
        .with(AxisId::OutputValidation, "L");
    // (0.85 + 0.62 + 0.27) / 3 = 0.58
    let result = ScoringProfile::Simple.compute(&input).unwrap();
    assert_eq!(result.final_score, 5.8);
    assert!(result.sub_scores.is_none());
}

#[test]
fn test_profile_dispatch_rejects_foreign_axes() {
    let err = ScoringProfile::Simple
        .compute(&AssessmentInput::composite_default())
        .unwrap_err();
    assert!(matches!(err, ScoreError::UnknownAxis { .. }));
}

#[test]
fn test_result_json_shape() {
    let result = compute_composite_score(&AssessmentInput::composite_default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["profile"], "composite");
    assert_eq!(json["finalScore"], 6.5);
    assert_eq!(json["riskCategory"], "Medium");
    assert_eq!(json["subScores"]["cvssBase"], 9.8);

    let simple = compute_simple_score(&AssessmentInput::new()).unwrap();
    let json = serde_json::to_value(&simple).unwrap();
    assert!(json.get("subScores").is_none());
}
