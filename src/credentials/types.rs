//! The normalized Bedrock configuration record and its wire shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized configuration handed to the client factory.
///
/// Built fresh for every model instance and never mutated afterwards, so
/// fields are read through accessors only.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedrockConfig {
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_token: Option<String>,
}

impl BedrockConfig {
    pub(super) fn new(
        region: String,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            region,
            access_key_id,
            secret_access_key,
            session_token,
        }
    }

    /// A record with no static credentials; the SDK's ambient chain supplies them.
    pub(super) fn region_only(region: String) -> Self {
        Self::new(region, None, None, None)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    pub fn secret_access_key(&self) -> Option<&str> {
        self.secret_access_key.as_deref()
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Whether both halves of a static key pair are present.
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for BedrockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("BedrockConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("session_token", &redact(&self.session_token))
            .finish()
    }
}

/// The JSON blob as users write it in `AWS_BEDROCK_CONFIG`.
///
/// Every field is optional here; which ones are required depends on the
/// selected strategy. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawConfig {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl RawConfig {
    /// Drops empty string values so they count as missing.
    pub(super) fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        Self {
            region: present(self.region),
            access_key_id: present(self.access_key_id),
            secret_access_key: present(self.secret_access_key),
            session_token: present(self.session_token),
        }
    }
}
