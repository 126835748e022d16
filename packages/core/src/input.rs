use crate::catalog::AxisId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_THREAT_NAME: &str = "Unnamed Threat";

/// A selection on one axis: an option code or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Code(String),
}

impl MetricValue {
    pub fn code(code: impl Into<String>) -> Self {
        MetricValue::Code(code.into())
    }

    /// Parses command-line style text: numbers become `Number`, anything else a code.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(number) => MetricValue::Number(number),
            Err(_) => MetricValue::Code(trimmed.to_string()),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Code(value.to_string())
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(number) => write!(f, "{}", number),
            MetricValue::Code(code) => write!(f, "{}", code),
        }
    }
}

/// The selections of one assessment, keyed by axis.
///
/// Partially filled inputs are legal: an absent axis is "not yet answered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    #[serde(
        default,
        rename = "threatName",
        skip_serializing_if = "Option::is_none"
    )]
    threat_name: Option<String>,

    #[serde(default)]
    metrics: BTreeMap<AxisId, MetricValue>,
}

impl AssessmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input used for the composite profile before anything has been collected.
    pub fn composite_default() -> Self {
        Self::new()
            .with_threat_name(DEFAULT_THREAT_NAME)
            .with(AxisId::AivssSpecificSeverity, 0.5)
            .with(AxisId::Acm, 1.2)
            .with(AxisId::AttackVector, "N")
            .with(AxisId::AttackComplexity, "L")
            .with(AxisId::PrivilegesRequired, "N")
            .with(AxisId::UserInteraction, "N")
            .with(AxisId::Scope, "U")
            .with(AxisId::Confidentiality, 0.56)
            .with(AxisId::Integrity, 0.56)
            .with(AxisId::Availability, 0.56)
            .with(AxisId::Societal, 0.55)
    }

    pub fn with_threat_name(mut self, name: impl Into<String>) -> Self {
        self.threat_name = Some(name.into());
        self
    }

    pub fn with(mut self, axis: AxisId, value: impl Into<MetricValue>) -> Self {
        self.set(axis, value);
        self
    }

    pub fn set(&mut self, axis: AxisId, value: impl Into<MetricValue>) {
        self.metrics.insert(axis, value.into());
    }

    /// Sets an axis by any accepted spelling of its name.
    pub fn set_named(&mut self, name: &str, value: impl Into<MetricValue>) -> Result<AxisId> {
        let axis = AxisId::parse(name)?;
        self.set(axis, value);
        Ok(axis)
    }

    pub fn set_threat_name(&mut self, name: impl Into<String>) {
        self.threat_name = Some(name.into());
    }

    pub fn clear(&mut self, axis: AxisId) -> Option<MetricValue> {
        self.metrics.remove(&axis)
    }

    pub fn get(&self, axis: AxisId) -> Option<&MetricValue> {
        self.metrics.get(&axis)
    }

    pub fn is_answered(&self, axis: AxisId) -> bool {
        self.metrics.contains_key(&axis)
    }

    pub fn answered(&self) -> impl Iterator<Item = (AxisId, &MetricValue)> {
        self.metrics.iter().map(|(axis, value)| (*axis, value))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn threat_name(&self) -> &str {
        self.threat_name.as_deref().unwrap_or(DEFAULT_THREAT_NAME)
    }

    /// Layers `self` over `base`: answered axes of `self` win.
    pub fn merged_over(&self, base: &AssessmentInput) -> AssessmentInput {
        let mut merged = base.clone();
        for (axis, value) in &self.metrics {
            merged.metrics.insert(*axis, value.clone());
        }
        if self.threat_name.is_some() {
            merged.threat_name = self.threat_name.clone();
        }
        merged
    }
}
