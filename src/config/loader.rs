//! File loading and merging for configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{BedrockEntry, Config, LoggingConfig, ProviderConfig};

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Reads and parses a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config at {:?}", path))
    }

    /// Loads the global config, or defaults when no file exists.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads the nearest project config above the current directory, if any.
    pub(super) fn load_project() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::find_project_config(&cwd)
            .map(|path| Self::load_from(&path))
            .transpose()
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        let bedrock = match (global.provider.bedrock, project.provider.bedrock) {
            (Some(g), Some(p)) => Some(BedrockEntry {
                config: p.config.or(g.config),
                policy: p.policy.or(g.policy),
            }),
            (g, p) => p.or(g),
        };
        Config {
            model: project.model.or(global.model),
            provider: ProviderConfig { bedrock },
            logging: LoggingConfig {
                level: project.logging.level.or(global.logging.level),
                format: project.logging.format.or(global.logging.format),
            },
        }
    }
}
