//! Static metric tables for both scoring profiles.
//!
//! Every categorical axis maps a short option code (`"H"`, `"N"`, ...) to a numeric
//! score. The tables are compile-time constants; lookups never allocate.

pub mod cvss;
pub mod simple;

use crate::calculator::ScoringProfile;
use crate::error::{Result, ScoreError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One selectable choice on a metric axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricOption {
    pub code: &'static str,
    pub label: &'static str,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Generates a typed option enum together with its catalogue table.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($code:literal, $label:literal, $score:expr, $desc:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const OPTIONS: &'static [$crate::catalog::MetricOption] = &[
                $($crate::catalog::MetricOption {
                    code: $code,
                    label: $label,
                    score: $score,
                    description: Some($desc),
                }),+
            ];

            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn score(self) -> f64 {
                match self {
                    $($name::$variant => $score),+
                }
            }

            /// Case-insensitive match on the option code.
            pub fn from_code(code: &str) -> Option<Self> {
                let code = code.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.code().eq_ignore_ascii_case(code))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

pub(crate) use option_enum;

/// Every metric axis known to either profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisId {
    // Simple profile
    AgentAutonomy,
    DataAccess,
    ActionImpact,
    HumanOversight,
    ModelReliability,
    PromptInjection,
    DataIntegrity,
    OutputValidation,
    // Composite profile: CVSS exploitability axes
    AttackVector,
    AttackComplexity,
    PrivilegesRequired,
    UserInteraction,
    Scope,
    // Composite profile: impact axes
    Confidentiality,
    Integrity,
    Availability,
    Societal,
    // Composite profile: free scalars
    AivssSpecificSeverity,
    Acm,
}

/// Whether an axis takes an option code or a number from a closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisKind {
    Categorical,
    Scalar { min: f64, max: f64 },
}

pub const SIMPLE_AXES: [AxisId; 8] = [
    AxisId::AgentAutonomy,
    AxisId::DataAccess,
    AxisId::ActionImpact,
    AxisId::HumanOversight,
    AxisId::ModelReliability,
    AxisId::PromptInjection,
    AxisId::DataIntegrity,
    AxisId::OutputValidation,
];

pub const COMPOSITE_AXES: [AxisId; 11] = [
    AxisId::AttackVector,
    AxisId::AttackComplexity,
    AxisId::PrivilegesRequired,
    AxisId::UserInteraction,
    AxisId::Scope,
    AxisId::Confidentiality,
    AxisId::Integrity,
    AxisId::Availability,
    AxisId::Societal,
    AxisId::AivssSpecificSeverity,
    AxisId::Acm,
];

impl AxisId {
    /// Canonical camelCase key, as used in assessment documents.
    pub fn name(self) -> &'static str {
        match self {
            AxisId::AgentAutonomy => "agentAutonomy",
            AxisId::DataAccess => "dataAccess",
            AxisId::ActionImpact => "actionImpact",
            AxisId::HumanOversight => "humanOversight",
            AxisId::ModelReliability => "modelReliability",
            AxisId::PromptInjection => "promptInjection",
            AxisId::DataIntegrity => "dataIntegrity",
            AxisId::OutputValidation => "outputValidation",
            AxisId::AttackVector => "attackVector",
            AxisId::AttackComplexity => "attackComplexity",
            AxisId::PrivilegesRequired => "privilegesRequired",
            AxisId::UserInteraction => "userInteraction",
            AxisId::Scope => "scope",
            AxisId::Confidentiality => "confidentiality",
            AxisId::Integrity => "integrity",
            AxisId::Availability => "availability",
            AxisId::Societal => "societal",
            AxisId::AivssSpecificSeverity => "aivssSpecificSeverity",
            AxisId::Acm => "acm",
        }
    }

    /// Human-readable title for rendering.
    pub fn title(self) -> &'static str {
        match self {
            AxisId::AgentAutonomy => "Agent Autonomy Level",
            AxisId::DataAccess => "Data Access Scope",
            AxisId::ActionImpact => "Action Impact Potential",
            AxisId::HumanOversight => "Human Oversight",
            AxisId::ModelReliability => "Model Reliability",
            AxisId::PromptInjection => "Prompt Injection Resistance",
            AxisId::DataIntegrity => "Data Integrity Controls",
            AxisId::OutputValidation => "Output Validation",
            AxisId::AttackVector => "Attack Vector",
            AxisId::AttackComplexity => "Attack Complexity",
            AxisId::PrivilegesRequired => "Privileges Required",
            AxisId::UserInteraction => "User Interaction",
            AxisId::Scope => "Scope",
            AxisId::Confidentiality => "Confidentiality Impact",
            AxisId::Integrity => "Integrity Impact",
            AxisId::Availability => "Availability Impact",
            AxisId::Societal => "Societal Impact",
            AxisId::AivssSpecificSeverity => "AIVSS Specific Severity",
            AxisId::Acm => "Agent Characteristics Multiplier",
        }
    }

    pub fn profile(self) -> ScoringProfile {
        if SIMPLE_AXES.contains(&self) {
            ScoringProfile::Simple
        } else {
            ScoringProfile::Composite
        }
    }

    pub fn kind(self) -> AxisKind {
        match self {
            AxisId::AivssSpecificSeverity => AxisKind::Scalar { min: 0.0, max: 1.0 },
            AxisId::Acm => AxisKind::Scalar { min: 1.0, max: 2.0 },
            _ => AxisKind::Categorical,
        }
    }

    /// Resolves an axis from its camelCase, snake_case or kebab-case spelling,
    /// or from the CVSS vector abbreviation (`AV`, `PR`, ...).
    pub fn parse(name: &str) -> Result<AxisId> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();

        let axis = match normalized.as_str() {
            "agentautonomy" => AxisId::AgentAutonomy,
            "dataaccess" => AxisId::DataAccess,
            "actionimpact" => AxisId::ActionImpact,
            "humanoversight" => AxisId::HumanOversight,
            "modelreliability" => AxisId::ModelReliability,
            "promptinjection" => AxisId::PromptInjection,
            "dataintegrity" => AxisId::DataIntegrity,
            "outputvalidation" => AxisId::OutputValidation,
            "attackvector" | "av" => AxisId::AttackVector,
            "attackcomplexity" | "ac" => AxisId::AttackComplexity,
            "privilegesrequired" | "pr" => AxisId::PrivilegesRequired,
            "userinteraction" | "ui" => AxisId::UserInteraction,
            "scope" | "s" => AxisId::Scope,
            "confidentiality" | "c" => AxisId::Confidentiality,
            "integrity" | "i" => AxisId::Integrity,
            "availability" | "a" => AxisId::Availability,
            "societal" | "societalimpact" => AxisId::Societal,
            "aivssspecificseverity" | "aivssseverity" => AxisId::AivssSpecificSeverity,
            "acm" | "agentcharacteristicsmultiplier" => AxisId::Acm,
            _ => {
                return Err(ScoreError::UnknownAxis {
                    name: name.to_string(),
                })
            }
        };
        Ok(axis)
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AxisId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        AxisId::parse(s)
    }
}

impl Serialize for AxisId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AxisId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        AxisId::parse(&name).map_err(serde::de::Error::custom)
    }
}

/// Ordered axis list of a profile.
pub fn axes(profile: ScoringProfile) -> &'static [AxisId] {
    match profile {
        ScoringProfile::Simple => &SIMPLE_AXES,
        ScoringProfile::Composite => &COMPOSITE_AXES,
    }
}

/// Option table of an axis. Scalar axes have no options.
pub fn options(axis: AxisId) -> &'static [MetricOption] {
    match axis {
        AxisId::AgentAutonomy => &simple::AGENT_AUTONOMY,
        AxisId::DataAccess => &simple::DATA_ACCESS,
        AxisId::ActionImpact => &simple::ACTION_IMPACT,
        AxisId::HumanOversight => &simple::HUMAN_OVERSIGHT,
        AxisId::ModelReliability => &simple::MODEL_RELIABILITY,
        AxisId::PromptInjection => &simple::PROMPT_INJECTION,
        AxisId::DataIntegrity => &simple::DATA_INTEGRITY,
        AxisId::OutputValidation => &simple::OUTPUT_VALIDATION,
        AxisId::AttackVector => cvss::AttackVector::OPTIONS,
        AxisId::AttackComplexity => cvss::AttackComplexity::OPTIONS,
        AxisId::PrivilegesRequired => cvss::PrivilegesRequired::OPTIONS,
        AxisId::UserInteraction => cvss::UserInteraction::OPTIONS,
        AxisId::Scope => cvss::Scope::OPTIONS,
        AxisId::Confidentiality | AxisId::Integrity | AxisId::Availability => {
            cvss::ImpactLevel::OPTIONS
        }
        AxisId::Societal => cvss::SocietalImpact::OPTIONS,
        AxisId::AivssSpecificSeverity | AxisId::Acm => &[],
    }
}

/// Finds the option selected by `code` on `axis`.
pub fn lookup(axis: AxisId, code: &str) -> Result<&'static MetricOption> {
    let wanted = code.trim();
    options(axis)
        .iter()
        .find(|option| option.code.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ScoreError::UnknownOptionCode {
            axis,
            code: code.to_string(),
        })
}
