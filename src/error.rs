//! Error type for credential resolution.

use thiserror::Error;

/// Setup-time misconfiguration surfaced while building a Bedrock config.
///
/// None of these are retryable: the caller has no fallback path and should
/// propagate the failure.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The serialized credential blob is not valid JSON for the expected shape.
    #[error("malformed Bedrock config: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Bedrock config is missing required field: region")]
    MissingRegion,

    /// Explicit credentials are required outside managed environments.
    #[error("Bedrock config is missing required field: {field} (no ambient AWS credentials available)")]
    MissingCredentials { field: &'static str },

    #[error("no Bedrock credentials available: set AWS_BEDROCK_CONFIG or run inside a managed AWS environment")]
    NoCredentialSource,
}

impl ConfigurationError {
    /// Whether this error came from a JSON parse failure rather than a
    /// missing field or missing source.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
