//! Managed cloud environment detection and region fallback.

use super::source::EnvSource;
use crate::constants::{DEFAULT_REGION_ENV, FALLBACK_REGION, MANAGED_ENV_MARKERS, REGION_ENV};

/// Returns `true` when any managed-environment marker is set to a non-empty
/// value (Lambda, ECS task, or EC2 instance metadata).
///
/// Absence of all markers yields `false`; this never fails.
pub fn is_managed_cloud_environment(env: &dyn EnvSource) -> bool {
    MANAGED_ENV_MARKERS
        .iter()
        .any(|marker| env.non_empty(marker).is_some())
}

/// Lists the markers that are set, in declaration order.
pub fn detected_markers(env: &dyn EnvSource) -> Vec<&'static str> {
    MANAGED_ENV_MARKERS
        .iter()
        .copied()
        .filter(|marker| env.non_empty(marker).is_some())
        .collect()
}

/// Region from the environment: `AWS_REGION`, then `AWS_DEFAULT_REGION`,
/// then `us-east-1`.
pub fn region_from_env(env: &dyn EnvSource) -> String {
    env.non_empty(REGION_ENV)
        .or_else(|| env.non_empty(DEFAULT_REGION_ENV))
        .unwrap_or_else(|| FALLBACK_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_markers_is_not_managed() {
        assert!(!is_managed_cloud_environment(&env(&[])));
        assert!(!is_managed_cloud_environment(&env(&[("AWS_REGION", "us-west-2")])));
    }

    #[test]
    fn test_each_marker_alone_is_managed() {
        for marker in MANAGED_ENV_MARKERS {
            let env = env(&[(*marker, "set")]);
            assert!(is_managed_cloud_environment(&env), "{marker} should be detected");
            assert_eq!(detected_markers(&env), vec![*marker]);
        }
    }

    #[test]
    fn test_empty_marker_is_ignored() {
        let env = env(&[("AWS_LAMBDA_FUNCTION_NAME", "")]);
        assert!(!is_managed_cloud_environment(&env));
        assert!(detected_markers(&env).is_empty());
    }

    #[test]
    fn test_whitespace_marker_counts_as_set() {
        let env = env(&[("AWS_EXECUTION_ENV", " ")]);
        assert!(is_managed_cloud_environment(&env));
        assert_eq!(detected_markers(&env), vec!["AWS_EXECUTION_ENV"]);
    }

    #[test]
    fn test_detected_markers_keeps_declaration_order() {
        let env = env(&[
            ("AWS_EC2_METADATA_TOKEN", "tok"),
            ("AWS_EXECUTION_ENV", "AWS_ECS_FARGATE"),
        ]);
        assert_eq!(
            detected_markers(&env),
            vec!["AWS_EXECUTION_ENV", "AWS_EC2_METADATA_TOKEN"]
        );
    }

    #[test]
    fn test_region_prefers_aws_region() {
        let env = env(&[("AWS_REGION", "eu-west-1"), ("AWS_DEFAULT_REGION", "ap-south-1")]);
        assert_eq!(region_from_env(&env), "eu-west-1");
    }

    #[test]
    fn test_region_falls_back_to_default_region() {
        let env = env(&[("AWS_DEFAULT_REGION", "ap-south-1")]);
        assert_eq!(region_from_env(&env), "ap-south-1");
    }

    #[test]
    fn test_whitespace_region_does_not_fall_through() {
        let env = env(&[("AWS_REGION", " "), ("AWS_DEFAULT_REGION", "eu-west-3")]);
        assert_eq!(region_from_env(&env), " ");
    }

    #[test]
    fn test_region_falls_back_to_us_east_1() {
        assert_eq!(region_from_env(&env(&[])), "us-east-1");
        assert_eq!(region_from_env(&env(&[("AWS_REGION", "")])), "us-east-1");
    }
}
