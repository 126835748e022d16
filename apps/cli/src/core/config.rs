use aivss_core::ScoringProfile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User preferences from `~/.aivss/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub default_profile: ScoringProfile,
    pub format: OutputFormat,
    pub color: bool,
    pub show_recommendations: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_profile: ScoringProfile::Composite,
            format: OutputFormat::Text,
            color: true,
            show_recommendations: true,
        }
    }
}

impl CliConfig {
    /// Default location, `~/.aivss/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".aivss").join("config.toml"))
    }

    /// Loads the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Applies `AIVSS_PROFILE`, `AIVSS_FORMAT` and `AIVSS_NO_COLOR` from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(profile) = lookup("AIVSS_PROFILE") {
            self.default_profile = profile
                .parse()
                .with_context(|| format!("Invalid AIVSS_PROFILE '{}'", profile))?;
        }

        if let Some(format) = lookup("AIVSS_FORMAT") {
            self.format = match format.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => anyhow::bail!("Invalid AIVSS_FORMAT '{}' (expected text or json)", format),
            };
        }

        if let Some(no_color) = lookup("AIVSS_NO_COLOR") {
            if !matches!(no_color.trim(), "" | "0" | "false") {
                self.color = false;
            }
        }

        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }
}
