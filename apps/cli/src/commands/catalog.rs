use aivss_core::{axes, options, AxisId, AxisKind, MetricOption, ScoringProfile};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::core::config::CliConfig;
use crate::ui::{self, Theme};

#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// Only list the axes of this profile
    #[arg(long)]
    pub profile: Option<ScoringProfile>,
}

#[derive(Debug, Serialize)]
struct AxisEntry {
    axis: AxisId,
    title: &'static str,
    profile: ScoringProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<[f64; 2]>,
    options: &'static [MetricOption],
}

fn entries(profiles: &[ScoringProfile]) -> Vec<AxisEntry> {
    profiles
        .iter()
        .flat_map(|profile| axes(*profile).iter())
        .map(|axis| AxisEntry {
            axis: *axis,
            title: axis.title(),
            profile: axis.profile(),
            range: match axis.kind() {
                AxisKind::Scalar { min, max } => Some([min, max]),
                AxisKind::Categorical => None,
            },
            options: options(*axis),
        })
        .collect()
}

impl CatalogCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let profiles = match self.profile {
            Some(profile) => vec![profile],
            None => ScoringProfile::ALL.to_vec(),
        };
        let entries = entries(&profiles);

        ui::emit(config.format, &entries, |entries| {
            let mut current = None;
            for entry in entries {
                if current != Some(entry.profile) {
                    current = Some(entry.profile);
                    println!("{}", Theme::primary(format!("{} profile", entry.profile)));
                }
                render_axis(entry);
            }
            Ok(())
        })
    }
}

fn render_axis(entry: &AxisEntry) {
    println!("{} {}", Theme::bold(entry.title), Theme::muted(format!("({})", entry.axis)));

    if let Some([min, max]) = entry.range {
        println!("   any number from {} to {}\n", min, max);
        return;
    }

    let mut table = ui::table(vec!["Code", "Option", "Score", "Description"]);
    for option in entry.options {
        table.add_row(vec![
            Cell::new(Theme::secondary(option.code)),
            Cell::new(option.label),
            Cell::new(option.score),
            Cell::new(option.description.unwrap_or_default()),
        ]);
    }
    println!("{table}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_per_profile() {
        assert_eq!(entries(&[ScoringProfile::Simple]).len(), 8);
        let composite = entries(&[ScoringProfile::Composite]);
        assert_eq!(composite.len(), 11);

        let acm = composite.iter().find(|e| e.axis == AxisId::Acm).unwrap();
        assert_eq!(acm.range, Some([1.0, 2.0]));
        assert!(acm.options.is_empty());
    }
}
