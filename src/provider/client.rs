//! Client construction seam.
//!
//! The remote Bedrock client is an external collaborator: it receives a
//! resolved [`BedrockConfig`] and hands back a model handle. [`ClientFactory`]
//! is that seam. [`BedrockClient`] is the built-in factory, which only
//! describes the handle (endpoint, model, credential mode) and does no I/O.

use anyhow::Result;

use crate::credentials::BedrockConfig;

/// Builds model handles from a resolved configuration.
pub trait ClientFactory {
    /// The model handle returned for a model id.
    type Model;

    /// Creates a handle for `model_id` using `config`.
    fn language_model(&self, config: BedrockConfig, model_id: &str) -> Result<Self::Model>;
}

/// How the handle authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    /// Static key pair from the serialized config.
    Static,
    /// Static key pair plus a session token.
    Temporary,
    /// Left to the SDK's default credential chain.
    Ambient,
}

impl CredentialMode {
    fn of(config: &BedrockConfig) -> Self {
        match (config.has_static_credentials(), config.session_token()) {
            (true, Some(_)) => Self::Temporary,
            (true, None) => Self::Static,
            (false, _) => Self::Ambient,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Temporary => "temporary",
            Self::Ambient => "credential chain",
        }
    }
}

/// A model handle produced by [`BedrockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedrockModel {
    pub model_id: String,
    pub endpoint: String,
    pub credentials: CredentialMode,
    pub config: BedrockConfig,
}

/// The built-in factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockClient;

impl BedrockClient {
    /// Bedrock runtime endpoint for a region.
    pub fn endpoint_for(region: &str) -> String {
        format!("https://bedrock-runtime.{region}.amazonaws.com")
    }
}

impl ClientFactory for BedrockClient {
    type Model = BedrockModel;

    fn language_model(&self, config: BedrockConfig, model_id: &str) -> Result<BedrockModel> {
        if model_id.trim().is_empty() {
            anyhow::bail!("No model id given for Amazon Bedrock");
        }
        Ok(BedrockModel {
            model_id: model_id.to_string(),
            endpoint: Self::endpoint_for(config.region()),
            credentials: CredentialMode::of(&config),
            config,
        })
    }
}
