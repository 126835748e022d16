use aivss_core::reference::{AcmBand, Characteristic, CHARACTERISTICS};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::core::config::CliConfig;
use crate::core::error::CliError;
use crate::ui::{self, Icon, Theme};

#[derive(Args, Debug)]
pub struct AcmCommand {
    /// Multiplier between 1.0 and 2.0 to place in its band
    pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
struct BandEntry {
    band: AcmBand,
    range: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct AcmOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    band: Option<AcmBand>,
    bands: Vec<BandEntry>,
    characteristics: &'static [Characteristic],
}

impl AcmCommand {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let band = self
            .value
            .map(AcmBand::of)
            .transpose()
            .map_err(CliError::from)?;

        let overview = AcmOverview {
            value: self.value,
            band,
            bands: AcmBand::ALL
                .iter()
                .map(|band| BandEntry {
                    band: *band,
                    range: band.range_label(),
                    description: band.description(),
                })
                .collect(),
            characteristics: &CHARACTERISTICS,
        };

        ui::emit(config.format, &overview, |overview| {
            render(overview);
            Ok(())
        })
    }
}

fn render(overview: &AcmOverview) {
    if let (Some(value), Some(band)) = (overview.value, overview.band) {
        println!(
            "{} ACM {} is in the {} band ({})\n",
            Icon::Robot,
            Theme::secondary(value),
            Theme::bold(band.description()),
            band.range_label()
        );
    }

    println!("{}", Theme::primary("Agent Characteristics Multiplier (ACM)"));
    let mut bands = ui::table(vec!["Range", "Band"]);
    for entry in &overview.bands {
        let description = if Some(entry.band) == overview.band {
            Theme::bold(entry.description)
        } else {
            entry.description.to_string()
        };
        bands.add_row(vec![Cell::new(entry.range), Cell::new(description)]);
    }
    println!("{bands}");

    println!("{}", Theme::primary("Characteristics:"));
    for characteristic in overview.characteristics {
        println!(
            "   • {}: {}",
            Theme::bold(characteristic.name),
            characteristic.description
        );
    }
}
