//! repokit configuration
//!
//! Configuration file: ~/.config/repokit/config.yaml
//!
//! Every key is optional; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory artifacts are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Suppress per-artifact confirmation lines
    #[serde(default)]
    pub quiet: bool,

    /// Summary report settings
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Settings for the package summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// File written by `summary --sink file`
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Width of the banner rule under the title
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    /// Width of the rule under each section heading
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("constellation-summary.log")
}

fn default_banner_width() -> usize {
    75
}

fn default_rule_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            quiet: false,
            summary: SummaryConfig::default(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            banner_width: default_banner_width(),
            rule_width: default_rule_width(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        // An empty file is valid YAML for "nothing set"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }

    /// Render as YAML, in the same shape `load_from` reads
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        std::fs::write(path, self.to_yaml()?)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
