//! Agent Characteristics Multiplier bands.

use crate::calculator::Acm;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcmBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl AcmBand {
    pub const ALL: [AcmBand; 4] = [
        AcmBand::Low,
        AcmBand::Moderate,
        AcmBand::High,
        AcmBand::VeryHigh,
    ];

    /// Band of a multiplier. Values between two published ranges belong to the upper one.
    pub fn of(acm: f64) -> Result<AcmBand> {
        Acm::new(acm).map(AcmBand::from)
    }

    pub fn range_label(self) -> &'static str {
        match self {
            AcmBand::Low => "1.0",
            AcmBand::Moderate => "1.1-1.3",
            AcmBand::High => "1.4-1.5",
            AcmBand::VeryHigh => "1.6-2.0",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AcmBand::Low => "Low agentic characteristics",
            AcmBand::Moderate => "Moderate characteristics",
            AcmBand::High => "High characteristics",
            AcmBand::VeryHigh => "Very high characteristics",
        }
    }
}

impl fmt::Display for AcmBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<Acm> for AcmBand {
    fn from(acm: Acm) -> Self {
        let acm = acm.value();
        if acm <= 1.0 {
            AcmBand::Low
        } else if acm <= 1.3 {
            AcmBand::Moderate
        } else if acm <= 1.5 {
            AcmBand::High
        } else {
            AcmBand::VeryHigh
        }
    }
}

/// A property of an agentic system that raises its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Characteristic {
    pub name: &'static str,
    pub description: &'static str,
}

pub const CHARACTERISTICS: [Characteristic; 5] = [
    Characteristic {
        name: "Autonomy",
        description: "Level of independent decision-making",
    },
    Characteristic {
        name: "Dynamic Identity",
        description: "Ability to assume different roles",
    },
    Characteristic {
        name: "Delegation",
        description: "Task distribution capabilities",
    },
    Characteristic {
        name: "Tool Use",
        description: "External tool integration and usage",
    },
    Characteristic {
        name: "Memory Use",
        description: "Persistent context and learning",
    },
];
