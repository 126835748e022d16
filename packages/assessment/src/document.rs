use crate::error::{AssessmentError, Result};
use aivss_core::reference::AcmBand;
use aivss_core::{
    AssessmentInput, AxisId, CompositeInput, MetricValue, ScoreError, ScoringProfile,
    DEFAULT_THREAT_NAME,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// On-disk encoding of an assessment document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(AssessmentError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Toml => write!(f, "TOML"),
            DocumentFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// One threat under assessment.
///
/// Metric keys are kept as written so that validation can point at misspelled axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ThreatEntry {
    /// Display name of the threat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Formula profile; falls back to the caller's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::profile_schema")]
    pub profile: Option<ScoringProfile>,

    /// Rank (1-10) of the related OWASP Agentic AI risk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owasp_rank: Option<u8>,

    /// Selected option code or value per metric axis
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    #[schemars(schema_with = "crate::schema::metrics_schema")]
    pub metrics: BTreeMap<String, MetricValue>,
}

impl ThreatEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_metric(mut self, axis: AxisId, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(axis.name().to_string(), value.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_THREAT_NAME)
    }

    pub fn effective_profile(&self, default: ScoringProfile) -> ScoringProfile {
        self.profile.unwrap_or(default)
    }

    /// Builds the calculator input. The composite profile layers the metrics over
    /// [`AssessmentInput::composite_default`]; the simple profile uses them as given.
    pub fn to_input(
        &self,
        profile: ScoringProfile,
    ) -> std::result::Result<AssessmentInput, ScoreError> {
        let mut answers = AssessmentInput::new().with_threat_name(self.display_name());
        for (key, value) in &self.metrics {
            answers.set_named(key, value.clone())?;
        }

        Ok(match profile {
            ScoringProfile::Simple => answers,
            ScoringProfile::Composite => answers.merged_over(&AssessmentInput::composite_default()),
        })
    }

    /// ACM band of the threat's composite input, once it passes the calculator's checks.
    pub fn acm_band(&self) -> Option<AcmBand> {
        let input = self.to_input(ScoringProfile::Composite).ok()?;
        CompositeInput::try_from(&input)
            .ok()
            .map(|composite| AcmBand::from(composite.acm))
    }
}

/// Serde shape of a document: either top-level threat fields or a `threats` register.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(rename = "AssessmentDocument")]
pub struct DocumentRepr {
    /// Display name of a single-threat document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::profile_schema")]
    profile: Option<ScoringProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    owasp_rank: Option<u8>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    #[schemars(schema_with = "crate::schema::metrics_schema")]
    metrics: BTreeMap<String, MetricValue>,

    /// Threat register; excludes the single-threat fields above
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threats: Option<Vec<ThreatEntry>>,
}

/// A parsed assessment: one threat, or a register of threats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRepr", into = "DocumentRepr")]
pub struct AssessmentDocument {
    threats: Vec<ThreatEntry>,
    register: bool,
}

impl TryFrom<DocumentRepr> for AssessmentDocument {
    type Error = String;

    fn try_from(repr: DocumentRepr) -> std::result::Result<Self, Self::Error> {
        let has_single_fields = repr.name.is_some()
            || repr.profile.is_some()
            || repr.owasp_rank.is_some()
            || !repr.metrics.is_empty();

        match repr.threats {
            Some(_) if has_single_fields => Err(
                "top-level `name`, `profile`, `owasp_rank` and `metrics` cannot be combined with `threats`"
                    .to_string(),
            ),
            Some(threats) => Ok(AssessmentDocument::register(threats)),
            None => Ok(AssessmentDocument::single(ThreatEntry {
                name: repr.name,
                profile: repr.profile,
                owasp_rank: repr.owasp_rank,
                metrics: repr.metrics,
            })),
        }
    }
}

impl From<AssessmentDocument> for DocumentRepr {
    fn from(document: AssessmentDocument) -> Self {
        if document.register {
            return DocumentRepr {
                threats: Some(document.threats),
                ..DocumentRepr::default()
            };
        }

        let entry = document.threats.into_iter().next().unwrap_or_default();
        DocumentRepr {
            name: entry.name,
            profile: entry.profile,
            owasp_rank: entry.owasp_rank,
            metrics: entry.metrics,
            threats: None,
        }
    }
}

impl AssessmentDocument {
    pub fn single(entry: ThreatEntry) -> Self {
        Self {
            threats: vec![entry],
            register: false,
        }
    }

    pub fn register(threats: Vec<ThreatEntry>) -> Self {
        Self {
            threats,
            register: true,
        }
    }

    pub fn threats(&self) -> &[ThreatEntry] {
        &self.threats
    }

    pub fn is_register(&self) -> bool {
        self.register
    }

    /// Field path prefix of the threat at `index`, e.g. `threats[2].`.
    pub fn field_prefix(&self, index: usize) -> String {
        if self.register {
            format!("threats[{}].", index)
        } else {
            String::new()
        }
    }

    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };

        let document: AssessmentDocument = parsed.map_err(|message| AssessmentError::Parse {
            format,
            message: message.trim().to_string(),
        })?;
        debug!(
            %format,
            threats = document.threats.len(),
            register = document.register,
            "parsed assessment document"
        );
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| AssessmentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), %format, "loading assessment document");
        Self::parse(&text, format)
    }

    pub fn to_text(&self, format: DocumentFormat) -> Result<String> {
        let rendered = match format {
            DocumentFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| AssessmentError::Render { format, message })
    }
}
