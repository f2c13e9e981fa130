//! Read-only views over environment variables.

use std::collections::HashMap;

/// A read-only source of environment variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, treating an empty value as unset.
    /// Whitespace is kept as-is and counts as set.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_non_empty_keeps_value_untouched() {
        let env = env(&[("AWS_REGION", "  eu-west-1 ")]);
        assert_eq!(env.non_empty("AWS_REGION").as_deref(), Some("  eu-west-1 "));
    }

    #[test]
    fn test_non_empty_filters_only_empty_values() {
        let env = env(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "   ")]);
        assert_eq!(env.non_empty("AWS_REGION"), None);
        assert_eq!(env.non_empty("AWS_DEFAULT_REGION").as_deref(), Some("   "));
        assert_eq!(env.non_empty("UNSET"), None);
    }

    #[test]
    fn test_process_env_reads_path() {
        // PATH is set in any environment the test harness runs in.
        assert!(ProcessEnv.var("PATH").is_some());
    }
}
