use aivss_core::{RiskCategory, MAX_SCORE};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::core::config::CliConfig;
use crate::core::error::CliError;
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct ClassifyCommand {
    /// Final score between 0.0 and 10.0
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification {
    score: f64,
    risk_category: RiskCategory,
    range: &'static str,
    recommendations: &'static [&'static str],
}

impl ClassifyCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        if !(0.0..=MAX_SCORE).contains(&self.score) {
            return Err(CliError::ScoreOutOfRange(self.score).into());
        }

        let category = RiskCategory::classify(self.score);
        let classification = Classification {
            score: self.score,
            risk_category: category,
            range: category.range_label(),
            recommendations: category.recommendations(),
        };

        ui::emit(config.format, &classification, |c| {
            println!(
                "{} {}  {}",
                Theme::category(c.risk_category, format!("{:.1}", c.score)),
                Theme::badge(c.risk_category),
                Theme::muted(c.range)
            );
            if config.show_recommendations {
                for item in c.recommendations {
                    println!("   • {}", item);
                }
            }
            Ok(())
        })
    }
}
