//! Credential strategy selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which credential source to trust, one variant per decision-table row.
///
/// Blob-carrying variants borrow the serialized config; use [`Strategy::name`]
/// rather than `{:?}` when logging, since the blob may hold secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy<'a> {
    /// Managed environment, no blob: region from env, ambient credentials.
    AmbientRegionOnly,
    /// Managed environment with a blob: region required, credentials optional.
    ManagedWithBlob(&'a str),
    /// Outside a managed environment with a blob: region and key pair required.
    ExplicitRequired(&'a str),
    /// Outside a managed environment, no blob: nothing to authenticate with.
    NoSource,
}

impl<'a> Strategy<'a> {
    /// Picks the strategy. First match wins; an empty blob counts as absent.
    pub fn select(serialized: Option<&'a str>, in_managed_env: bool) -> Self {
        let serialized = serialized.filter(|s| !s.is_empty());
        match (in_managed_env, serialized) {
            (true, None) => Self::AmbientRegionOnly,
            (true, Some(blob)) => Self::ManagedWithBlob(blob),
            (false, Some(blob)) => Self::ExplicitRequired(blob),
            (false, None) => Self::NoSource,
        }
    }

    /// Stable, secret-free name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AmbientRegionOnly => "ambient-region-only",
            Self::ManagedWithBlob(_) => "managed-with-config",
            Self::ExplicitRequired(_) => "explicit-credentials",
            Self::NoSource => "no-source",
        }
    }
}

/// How strictly to treat the serialized blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPolicy {
    /// Follow the strategy table; require explicit keys outside managed environments.
    #[default]
    Explicit,
    /// Only resolve a region and always defer to the SDK's credential chain.
    Chain,
}
