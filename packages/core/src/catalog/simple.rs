//! Eight-axis catalogue of the simple-average profile.
//!
//! Every axis weighs a code the same way (`H` = 0.85, `M` = 0.62, `L` = 0.27), control
//! axes included. The option labels say what the level means on each axis.

use super::{option_enum, MetricOption};

const HIGH: f64 = 0.85;
const MEDIUM: f64 = 0.62;
const LOW: f64 = 0.27;

option_enum! {
    /// Level selected on a simple-profile axis.
    Level {
        High => ("H", "High", HIGH, "Strongest expression of the characteristic"),
        Medium => ("M", "Medium", MEDIUM, "Moderate expression of the characteristic"),
        Low => ("L", "Low", LOW, "Weakest expression of the characteristic"),
    }
}

const fn levels(high: &'static str, medium: &'static str, low: &'static str) -> [MetricOption; 3] {
    [
        MetricOption {
            code: "H",
            label: high,
            score: HIGH,
            description: None,
        },
        MetricOption {
            code: "M",
            label: medium,
            score: MEDIUM,
            description: None,
        },
        MetricOption {
            code: "L",
            label: low,
            score: LOW,
            description: None,
        },
    ]
}

pub static AGENT_AUTONOMY: [MetricOption; 3] = levels(
    "High (Fully Autonomous)",
    "Medium (Semi-Autonomous)",
    "Low (Human-Guided)",
);

pub static DATA_ACCESS: [MetricOption; 3] = levels(
    "High (Sensitive/PII)",
    "Medium (Internal Data)",
    "Low (Public Data)",
);

pub static ACTION_IMPACT: [MetricOption; 3] = levels(
    "High (Critical Systems)",
    "Medium (Business Operations)",
    "Low (Limited Scope)",
);

// Control axes

pub static HUMAN_OVERSIGHT: [MetricOption; 3] = levels(
    "High (Continuous Monitoring)",
    "Medium (Periodic Review)",
    "Low (Minimal Oversight)",
);

pub static MODEL_RELIABILITY: [MetricOption; 3] = levels(
    "High (Extensively Tested)",
    "Medium (Standard Testing)",
    "Low (Limited Testing)",
);

pub static PROMPT_INJECTION: [MetricOption; 3] = levels(
    "High (Strong Defenses)",
    "Medium (Basic Protections)",
    "Low (Vulnerable)",
);

pub static DATA_INTEGRITY: [MetricOption; 3] = levels(
    "High (Comprehensive)",
    "Medium (Standard)",
    "Low (Basic)",
);

pub static OUTPUT_VALIDATION: [MetricOption; 3] = levels(
    "High (Strict Validation)",
    "Medium (Standard Checks)",
    "Low (Limited Validation)",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{lookup, AxisId, SIMPLE_AXES};

    #[test]
    fn test_table_scores_match_levels() {
        for axis in SIMPLE_AXES {
            for level in Level::ALL {
                let option = lookup(axis, level.code()).unwrap();
                assert_eq!(option.score, level.score(), "{axis} {level}");
            }
        }
        assert_eq!(lookup(AxisId::HumanOversight, "H").unwrap().score, 0.85);
        assert_eq!(lookup(AxisId::OutputValidation, "L").unwrap().score, 0.27);
    }

    #[test]
    fn test_level_weights() {
        assert_eq!(Level::from_code("h"), Some(Level::High));
        assert_eq!(Level::High.score(), 0.85);
        assert_eq!(Level::Medium.score(), 0.62);
        assert_eq!(Level::Low.score(), 0.27);
        assert_eq!(Level::from_code("X"), None);
    }
}
