use super::{table, Icon, Theme};
use aivss_assessment::{ScoreReport, ThreatScore};
use aivss_core::{
    RiskCategory, SubScores, MITIGATION_MULTIPLIER, TEMPORAL_MULTIPLIER, WEIGHT_AGENTIC,
    WEIGHT_CVSS_BASE, WEIGHT_IMPACT,
};
use comfy_table::Cell;

pub fn render_report(report: &ScoreReport, show_recommendations: bool) {
    for threat in &report.threats {
        render_threat(threat, show_recommendations);
    }

    if report.threats.len() > 1 {
        render_summary(report);
    }
    render_legend();
}

pub fn render_threat(threat: &ThreatScore, show_recommendations: bool) {
    let result = &threat.result;

    println!(
        "{} {}  {}",
        Icon::Shield,
        Theme::bold(&threat.name),
        Theme::muted(format!("({} profile)", threat.profile))
    );
    println!(
        "   AIVSS Score: {} / 10  {}",
        Theme::category(result.risk_category, format!("{:.1}", result.final_score)),
        Theme::badge(result.risk_category)
    );

    if let (Some(rank), Some(name)) = (threat.owasp_rank, threat.owasp_name) {
        println!("   {} OWASP Agentic AI #{}: {}", Icon::Target, rank, name);
    }
    if let Some(band) = threat.acm_band {
        println!(
            "   {} ACM band: {} ({})",
            Icon::Robot,
            band.description(),
            band.range_label()
        );
    }

    if let Some(sub) = &result.sub_scores {
        println!();
        render_breakdown(sub);
    }

    if show_recommendations {
        render_recommendations(result.risk_category);
    }
    println!();
}

fn render_breakdown(sub: &SubScores) {
    let mut breakdown = table(vec!["Component", "Score", "Weight", "Weighted"]);
    breakdown.add_row(vec![
        Cell::new("CVSS Base"),
        Cell::new(format!("{:.1}", sub.cvss_base)),
        Cell::new(format!("{}", WEIGHT_CVSS_BASE)),
        Cell::new(format!("{:.2}", sub.weighted_cvss)),
    ]);
    breakdown.add_row(vec![
        Cell::new("Agentic AI"),
        Cell::new(format!("{:.1}", sub.agentic_component)),
        Cell::new(format!("{}", WEIGHT_AGENTIC)),
        Cell::new(format!("{:.2}", sub.weighted_agentic)),
    ]);
    breakdown.add_row(vec![
        Cell::new("Impact"),
        Cell::new(format!("{:.1}", sub.overall_impact)),
        Cell::new(format!("{}", WEIGHT_IMPACT)),
        Cell::new(format!("{:.2}", sub.weighted_impact)),
    ]);
    println!("{breakdown}");
    println!(
        "   {}",
        Theme::muted(format!(
            "exploitability {:.2}, impact {:.2}; temporal x{} mitigation x{}",
            sub.exploitability, sub.impact, TEMPORAL_MULTIPLIER, MITIGATION_MULTIPLIER
        ))
    );
}

fn render_recommendations(category: RiskCategory) {
    let recommendations = category.recommendations();
    if recommendations.is_empty() {
        return;
    }

    println!("   {}", Theme::primary("Recommendations:"));
    for item in recommendations {
        println!("   • {}", item);
    }
}

fn render_summary(report: &ScoreReport) {
    let mut summary = table(vec!["#", "Threat", "Profile", "Score", "Category"]);
    for threat in &report.threats {
        summary.add_row(vec![
            Cell::new(threat.index + 1),
            Cell::new(&threat.name),
            Cell::new(threat.profile),
            Cell::new(format!("{:.1}", threat.result.final_score)),
            Cell::new(Theme::category(
                threat.result.risk_category,
                threat.result.risk_category,
            )),
        ]);
    }
    println!("{} {}", Icon::Gauge, Theme::bold("Summary"));
    println!("{summary}");
    println!(
        "   Highest severity: {}",
        Theme::badge(report.highest())
    );
    println!();
}

pub fn render_legend() {
    println!("{}", Theme::primary("Score Interpretation:"));
    for category in RiskCategory::all() {
        println!(
            "   {:<11} {}",
            category.range_label(),
            Theme::category(*category, category.label())
        );
    }
}
