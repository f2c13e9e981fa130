//! Model resolution.
//!
//! Resolves which Bedrock model to use based on CLI flags, config file,
//! and the hardcoded default.

use super::models::{find_model, ModelInfo};
use crate::config::Config;
use crate::constants::DEFAULT_MODEL;

/// Resolved model id plus its catalog entry, when known.
#[derive(Debug)]
pub struct ModelSelection {
    pub model: String,
    pub info: Option<&'static ModelInfo>,
}

/// Resolve which model to use.
/// Priority: CLI flag > config file > default.
///
/// Ids outside the catalog (custom inference profiles, ARNs) pass through
/// with `info` set to `None`.
pub fn resolve_model(cli_model: Option<&str>, config: &Config) -> ModelSelection {
    let model = cli_model
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .or_else(|| config.model_name())
        .unwrap_or(DEFAULT_MODEL)
        .to_string();

    let info = find_model(&model);
    if info.is_none() {
        tracing::debug!(model = %model, "model not in Bedrock catalog, passing through");
    }

    ModelSelection { model, info }
}
