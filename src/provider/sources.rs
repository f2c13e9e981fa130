//! Lookup of the serialized credential blob.

use std::collections::HashMap;
use std::fmt;

use crate::config::Config;
use crate::constants::{CONFIG_ENV_KEY, PROVIDER_NAME};
use crate::environment::EnvSource;

/// Where the serialized credential blob came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Per-request key map, keyed by provider name.
    RequestKey,
    /// `[provider.bedrock] config` in a config file.
    ConfigFile,
    /// The `AWS_BEDROCK_CONFIG` environment variable.
    Environment,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestKey => write!(f, "request key"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Environment => write!(f, "{CONFIG_ENV_KEY}"),
        }
    }
}

/// A serialized credential blob and its origin.
#[derive(Clone, PartialEq, Eq)]
pub struct SerializedConfig {
    pub blob: String,
    pub origin: ConfigOrigin,
}

impl fmt::Debug for SerializedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedConfig")
            .field("blob", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Finds the serialized blob.
/// Priority: request key map > config file > `AWS_BEDROCK_CONFIG`.
///
/// Empty values at any level are skipped.
pub fn find_serialized_config(
    api_keys: &HashMap<String, String>,
    config: &Config,
    env: &dyn EnvSource,
) -> Option<SerializedConfig> {
    let request = api_keys
        .get(PROVIDER_NAME)
        .filter(|v| !v.is_empty())
        .map(|blob| (blob.clone(), ConfigOrigin::RequestKey));
    let file = || {
        config
            .bedrock_config()
            .map(|blob| (blob.to_string(), ConfigOrigin::ConfigFile))
    };
    let process = || {
        env.non_empty(CONFIG_ENV_KEY)
            .map(|blob| (blob, ConfigOrigin::Environment))
    };

    request
        .or_else(file)
        .or_else(process)
        .map(|(blob, origin)| SerializedConfig { blob, origin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BedrockEntry;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn config_with_blob(blob: &str) -> Config {
        let mut config = Config::default();
        config.provider.bedrock = Some(BedrockEntry {
            config: Some(blob.to_string()),
            policy: None,
        });
        config
    }

    #[test]
    fn test_request_key_wins() {
        let keys = map(&[("AmazonBedrock", "request")]);
        let env = map(&[("AWS_BEDROCK_CONFIG", "env")]);
        let found = find_serialized_config(&keys, &config_with_blob("file"), &env).unwrap();
        assert_eq!(found.blob, "request");
        assert_eq!(found.origin, ConfigOrigin::RequestKey);
    }

    #[test]
    fn test_config_file_before_env() {
        let env = map(&[("AWS_BEDROCK_CONFIG", "env")]);
        let found = find_serialized_config(&map(&[]), &config_with_blob("file"), &env).unwrap();
        assert_eq!(found.origin, ConfigOrigin::ConfigFile);
    }

    #[test]
    fn test_env_fallback() {
        let env = map(&[("AWS_BEDROCK_CONFIG", r#"{"region":"us-east-1"}"#)]);
        let found = find_serialized_config(&map(&[]), &Config::default(), &env).unwrap();
        assert_eq!(found.blob, r#"{"region":"us-east-1"}"#);
        assert_eq!(found.origin, ConfigOrigin::Environment);
    }

    #[test]
    fn test_whitespace_request_key_is_kept() {
        let keys = map(&[("AmazonBedrock", " ")]);
        let env = map(&[("AWS_BEDROCK_CONFIG", "env")]);
        let found = find_serialized_config(&keys, &Config::default(), &env).unwrap();
        assert_eq!(found.origin, ConfigOrigin::RequestKey);
        assert_eq!(found.blob, " ");
    }

    #[test]
    fn test_other_provider_keys_ignored() {
        let keys = map(&[("OpenAI", "sk-123")]);
        assert_eq!(find_serialized_config(&keys, &Config::default(), &map(&[])), None);
    }

    #[test]
    fn test_empty_values_skipped() {
        let keys = map(&[("AmazonBedrock", "")]);
        let env = map(&[("AWS_BEDROCK_CONFIG", "env")]);
        let found = find_serialized_config(&keys, &config_with_blob(""), &env).unwrap();
        assert_eq!(found.origin, ConfigOrigin::Environment);
    }

    #[test]
    fn test_debug_hides_blob() {
        let keys = map(&[("AmazonBedrock", "secret-blob")]);
        let found = find_serialized_config(&keys, &Config::default(), &map(&[])).unwrap();
        assert!(!format!("{found:?}").contains("secret-blob"));
    }
}
