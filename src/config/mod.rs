//! Configuration types and path resolution.
//!
//! Settings are stored as TOML at the platform's XDG config path
//! (e.g. `~/.config/bedrock-provider/config.toml` on Linux), optionally
//! overridden by a `bedrock-provider.toml` in the project tree. The files are
//! only ever read.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::{BedrockEntry, Config, LoggingConfig, ProviderConfig};

use anyhow::Result;

use crate::environment::ProcessEnv;

impl Config {
    /// Load config with precedence: project > global > defaults, then
    /// resolve `{env:VAR}` substitutions against the process environment.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project()?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions(&ProcessEnv);
        Ok(config)
    }
}
