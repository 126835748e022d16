use aivss_core::reference::{by_rank, top10, AgenticRisk};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;

use crate::core::config::CliConfig;
use crate::core::error::CliError;
use crate::ui::{self, Icon, Theme};

#[derive(Args, Debug)]
pub struct RisksCommand {
    /// Show one risk in detail
    #[arg(long)]
    pub rank: Option<u8>,
}

impl RisksCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self.rank {
            Some(rank) => {
                let risk = by_rank(rank).ok_or(CliError::UnknownRank(rank))?;
                ui::emit(config.format, risk, |risk| {
                    render_detail(risk);
                    Ok(())
                })
            }
            None => ui::emit(config.format, &top10(), |risks| {
                render_list(risks);
                Ok(())
            }),
        }
    }
}

fn render_list(risks: &[AgenticRisk]) {
    println!(
        "{} {}",
        Icon::Shield,
        Theme::primary("OWASP Top 10 for Agentic AI")
    );
    let mut table = ui::table(vec!["#", "Risk", "Severity", "Key risks"]);
    for risk in risks {
        table.add_row(vec![
            Cell::new(risk.rank),
            Cell::new(risk.name),
            Cell::new(Theme::category(risk.severity, risk.severity)),
            Cell::new(risk.key_risks.join(", ")),
        ]);
    }
    println!("{table}");
}

fn render_detail(risk: &AgenticRisk) {
    println!(
        "{} {} {}",
        Theme::secondary(format!("#{}", risk.rank)),
        Theme::bold(risk.name),
        Theme::badge(risk.severity)
    );
    println!("   {}", risk.description);
    println!("   {}", Theme::primary("Key risk areas:"));
    for item in risk.key_risks {
        println!("   • {}", item);
    }
}
