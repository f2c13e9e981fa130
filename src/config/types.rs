//! Struct definitions for bedrock-provider configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::credentials::CredentialPolicy;

/// Root configuration, deserialized from `config.toml` or the project file.
///
/// Every field is optional so the tool runs with defaults when no config
/// file exists.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Default model identifier (e.g. `"amazon.nova-lite-v1:0"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Tracing subscriber settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Provider-specific configuration map.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProviderConfig {
    /// Settings for the Amazon Bedrock provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrock: Option<BedrockEntry>,
}

/// Amazon Bedrock provider settings.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct BedrockEntry {
    /// Serialized JSON credential blob, usually `"{env:AWS_BEDROCK_CONFIG}"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Credential policy; defaults to [`CredentialPolicy::Explicit`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<CredentialPolicy>,
}

// The blob may carry a secret key, so `{:?}` only says whether it is set.
impl fmt::Debug for BedrockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockEntry")
            .field("config", &self.config.as_ref().map(|_| "<redacted>"))
            .field("policy", &self.policy)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Tracing filter directive (e.g. `"info"`, `"bedrock_provider=debug"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// `"pretty"` or `"json"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedrock_entry_debug_redacts_blob() {
        let entry = BedrockEntry {
            config: Some(r#"{"secretAccessKey":"hunter2"}"#.to_string()),
            policy: Some(CredentialPolicy::Chain),
        };
        let debug = format!("{entry:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("Chain"));

        let mut config = Config::default();
        config.provider.bedrock = Some(entry);
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
