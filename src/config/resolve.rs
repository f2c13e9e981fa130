//! Environment variable substitution and effective-setting accessors.

use super::types::Config;
use crate::constants::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};
use crate::credentials::CredentialPolicy;
use crate::environment::EnvSource;

impl Config {
    /// Resolve `{env:VAR_NAME}` patterns in string fields.
    pub fn resolve_substitutions(&mut self, env: &dyn EnvSource) {
        if let Some(ref mut model) = self.model {
            *model = resolve_str(model, env);
        }
        if let Some(ref mut entry) = self.provider.bedrock {
            if let Some(ref mut blob) = entry.config {
                *blob = resolve_str(blob, env);
            }
        }
        if let Some(ref mut level) = self.logging.level {
            *level = resolve_str(level, env);
        }
        if let Some(ref mut format) = self.logging.format {
            *format = resolve_str(format, env);
        }
    }

    /// The serialized credential blob from the config file, if set and non-empty.
    pub fn bedrock_config(&self) -> Option<&str> {
        self.provider
            .bedrock
            .as_ref()
            .and_then(|e| e.config.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Configured credential policy, [`CredentialPolicy::Explicit`] by default.
    pub fn credential_policy(&self) -> CredentialPolicy {
        self.provider
            .bedrock
            .as_ref()
            .and_then(|e| e.policy)
            .unwrap_or_default()
    }

    /// Configured model, if non-blank.
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.trim().is_empty())
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_format(&self) -> &str {
        self.logging.format.as_deref().unwrap_or(DEFAULT_LOG_FORMAT)
    }
}

/// Replace `{env:VAR}` with the environment variable value (empty when unset).
fn resolve_str(s: &str, env: &dyn EnvSource) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("{env:") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 5..start + end];
        let value = env.var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        // Substituted text is never re-scanned.
        from = start + value.len();
    }
    result
}
