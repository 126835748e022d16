//! CVSS v3.1 aligned axes of the composite profile.

use super::option_enum;

option_enum! {
    AttackVector {
        Network => ("N", "Network", 0.85, "Exploitable remotely across the network"),
        Adjacent => ("A", "Adjacent", 0.62, "Requires a shared physical or logical network"),
        Local => ("L", "Local", 0.55, "Requires local access or a user-driven payload"),
        Physical => ("P", "Physical", 0.2, "Requires physical interaction with the system"),
    }
}

option_enum! {
    AttackComplexity {
        Low => ("L", "Low", 0.77, "No specialised conditions are needed"),
        High => ("H", "High", 0.44, "Success depends on conditions beyond the attacker's control"),
    }
}

option_enum! {
    PrivilegesRequired {
        None => ("N", "None", 0.85, "Unauthenticated attacker"),
        Low => ("L", "Low", 0.62, "Basic user-level capabilities"),
        High => ("H", "High", 0.27, "Administrative or significant control"),
    }
}

option_enum! {
    UserInteraction {
        None => ("N", "None", 0.85, "No user action is needed"),
        Required => ("R", "Required", 0.62, "A user must take some action"),
    }
}

option_enum! {
    /// The option score is the impact coefficient used for that scope.
    Scope {
        Unchanged => ("U", "Unchanged", 6.42, "Effects stay within the vulnerable component"),
        Changed => ("C", "Changed", 7.52, "Effects reach components beyond the vulnerable one"),
    }
}

option_enum! {
    /// Confidentiality, integrity and availability impact.
    ImpactLevel {
        None => ("N", "None", 0.0, "No impact"),
        Low => ("L", "Low", 0.22, "Limited impact"),
        High => ("H", "High", 0.56, "Total or serious impact"),
    }
}

option_enum! {
    SocietalImpact {
        None => ("N", "None", 0.0, "No effect beyond the operator"),
        Low => ("L", "Low", 0.22, "Limited harm to individuals or groups"),
        Medium => ("M", "Medium", 0.55, "Noticeable harm to communities or markets"),
        High => ("H", "High", 0.85, "Widespread or lasting societal harm"),
    }
}

/// Numeric enumerations are matched with a small tolerance so that values read from
/// text (`0.56`) find their option.
const VALUE_TOLERANCE: f64 = 1e-9;

impl ImpactLevel {
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| (level.score() - value).abs() < VALUE_TOLERANCE)
    }
}

impl SocietalImpact {
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| (level.score() - value).abs() < VALUE_TOLERANCE)
    }
}
