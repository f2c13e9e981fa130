//! Decision-table evaluation for Bedrock credentials.

use super::strategy::{CredentialPolicy, Strategy};
use super::types::{BedrockConfig, RawConfig};
use crate::environment::{region_from_env, EnvSource, ProcessEnv};
use crate::error::ConfigurationError;

/// Resolves a [`BedrockConfig`] using the process environment for region fallback.
///
/// # Errors
///
/// Returns [`ConfigurationError`] when the blob is malformed, lacks a region,
/// lacks a key pair outside a managed environment, or when no credential
/// source exists at all.
pub fn resolve(
    serialized: Option<&str>,
    in_managed_env: bool,
) -> Result<BedrockConfig, ConfigurationError> {
    resolve_with(serialized, in_managed_env, &ProcessEnv)
}

/// Like [`resolve`], reading region variables from `env`.
pub fn resolve_with(
    serialized: Option<&str>,
    in_managed_env: bool,
    env: &dyn EnvSource,
) -> Result<BedrockConfig, ConfigurationError> {
    let strategy = Strategy::select(serialized, in_managed_env);
    tracing::debug!(
        strategy = strategy.name(),
        in_managed_env,
        "selected Bedrock credential strategy"
    );

    match strategy {
        Strategy::AmbientRegionOnly => Ok(BedrockConfig::region_only(region_from_env(env))),
        Strategy::ManagedWithBlob(blob) => {
            let raw = parse(blob)?;
            let region = raw.region.ok_or(ConfigurationError::MissingRegion)?;
            Ok(BedrockConfig::new(
                region,
                raw.access_key_id,
                raw.secret_access_key,
                raw.session_token,
            ))
        }
        Strategy::ExplicitRequired(blob) => {
            let raw = parse(blob)?;
            let region = raw.region.ok_or(ConfigurationError::MissingRegion)?;
            let access_key_id = raw
                .access_key_id
                .ok_or(ConfigurationError::MissingCredentials {
                    field: "accessKeyId",
                })?;
            let secret_access_key =
                raw.secret_access_key
                    .ok_or(ConfigurationError::MissingCredentials {
                        field: "secretAccessKey",
                    })?;
            Ok(BedrockConfig::new(
                region,
                Some(access_key_id),
                Some(secret_access_key),
                raw.session_token,
            ))
        }
        Strategy::NoSource => Err(ConfigurationError::NoCredentialSource),
    }
}

/// Region-only resolution that always defers to the SDK credential chain.
///
/// The blob's `region` wins when it parses; a malformed blob or a blob
/// without a region falls back to the environment. Never fails.
pub fn resolve_region_only(serialized: Option<&str>, env: &dyn EnvSource) -> BedrockConfig {
    let from_blob = serialized
        .filter(|s| !s.is_empty())
        .and_then(|blob| match parse(blob) {
            Ok(raw) => raw.region,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unparseable Bedrock config");
                None
            }
        });
    BedrockConfig::region_only(from_blob.unwrap_or_else(|| region_from_env(env)))
}

/// Dispatches on `policy`: the strategy table for [`CredentialPolicy::Explicit`],
/// region-only for [`CredentialPolicy::Chain`].
pub fn resolve_with_policy(
    policy: CredentialPolicy,
    serialized: Option<&str>,
    in_managed_env: bool,
    env: &dyn EnvSource,
) -> Result<BedrockConfig, ConfigurationError> {
    match policy {
        CredentialPolicy::Explicit => resolve_with(serialized, in_managed_env, env),
        CredentialPolicy::Chain => Ok(resolve_region_only(serialized, env)),
    }
}

fn parse(blob: &str) -> Result<RawConfig, ConfigurationError> {
    serde_json::from_str::<RawConfig>(blob)
        .map(RawConfig::normalized)
        .map_err(ConfigurationError::Malformed)
}
