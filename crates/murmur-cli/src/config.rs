//! CLI configuration schema and loading.
//!
//! Murmur reads an optional TOML file (see `paths::config_path`). Every key
//! has a default, and command-line flags override whatever the file says.

use std::path::Path;

use anyhow::{Context, Result};
use murmur_ingest::PostFormat;
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum rows printed by `rank`. Unlimited when absent.
    pub limit: Option<usize>,
    /// Print the follower count next to each handle.
    pub show_scores: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: None,
            show_scores: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub format: PostFormat,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
