use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity band of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    /// Total over every `f64`: zero, negatives and NaN are `None`.
    pub fn classify(score: f64) -> RiskCategory {
        if score.is_nan() || score <= 0.0 {
            RiskCategory::None
        } else if score < 4.0 {
            RiskCategory::Low
        } else if score < 7.0 {
            RiskCategory::Medium
        } else if score < 9.0 {
            RiskCategory::High
        } else {
            RiskCategory::Critical
        }
    }

    pub fn all() -> &'static [RiskCategory] {
        &[
            RiskCategory::None,
            RiskCategory::Low,
            RiskCategory::Medium,
            RiskCategory::High,
            RiskCategory::Critical,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::None => "None",
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
            RiskCategory::Critical => "Critical",
        }
    }

    /// Score interval shown in the interpretation legend.
    pub fn range_label(self) -> &'static str {
        match self {
            RiskCategory::None => "0.0",
            RiskCategory::Low => "0.1 - 3.9",
            RiskCategory::Medium => "4.0 - 6.9",
            RiskCategory::High => "7.0 - 8.9",
            RiskCategory::Critical => "9.0 - 10.0",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskCategory::None => &[],
            RiskCategory::Low => &[
                "Continue monitoring",
                "Maintain current controls",
                "Regular assessments",
            ],
            RiskCategory::Medium => &[
                "Plan remediation timeline",
                "Implement additional safeguards",
                "Regular security reviews",
            ],
            RiskCategory::High => &[
                "Priority remediation needed",
                "Increase monitoring",
                "Review access controls",
            ],
            RiskCategory::Critical => &[
                "Immediate action required",
                "Disable system if possible",
                "Implement emergency controls",
            ],
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
