//! The Amazon Bedrock provider.
//!
//! Maps a logical model name to a Bedrock model handle. Each request runs
//! the environment gate, locates the serialized credential blob, resolves a
//! [`BedrockConfig`], and hands it to a [`ClientFactory`].

mod client;
mod models;
mod resolve;
mod sources;

pub use client::{BedrockClient, BedrockModel, ClientFactory, CredentialMode};
pub use models::{find_model, ModelInfo, BEDROCK_MODELS};
pub use resolve::{resolve_model, ModelSelection};
pub use sources::{find_serialized_config, ConfigOrigin, SerializedConfig};

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::config::Config;
use crate::constants::{API_KEY_LINK, CONFIG_ENV_KEY, PROVIDER_NAME};
use crate::credentials::{resolve_with_policy, BedrockConfig, CredentialPolicy, Strategy};
use crate::environment::{is_managed_cloud_environment, EnvSource};
use crate::error::ConfigurationError;

/// Outcome of credential resolution, with enough context to explain it.
#[derive(Debug)]
pub struct Resolution {
    pub config: BedrockConfig,
    /// Secret-free name of the branch that produced `config`.
    pub strategy: &'static str,
    pub origin: Option<ConfigOrigin>,
    pub in_managed_env: bool,
    pub policy: CredentialPolicy,
}

/// Amazon Bedrock provider bound to a loaded config and an environment.
pub struct BedrockProvider<'a> {
    config: &'a Config,
    env: &'a dyn EnvSource,
    policy: CredentialPolicy,
}

impl<'a> BedrockProvider<'a> {
    /// Creates a provider using the config file's credential policy.
    pub fn new(config: &'a Config, env: &'a dyn EnvSource) -> Self {
        Self {
            config,
            env,
            policy: config.credential_policy(),
        }
    }

    /// Overrides the credential policy.
    pub fn with_policy(mut self, policy: CredentialPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn api_key_link(&self) -> &'static str {
        API_KEY_LINK
    }

    /// Name of the variable holding the serialized credential blob.
    pub fn api_token_key(&self) -> &'static str {
        CONFIG_ENV_KEY
    }

    pub fn static_models(&self) -> &'static [ModelInfo] {
        BEDROCK_MODELS
    }

    /// Resolves the configuration record for this request.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigurationError`] from the resolver unchanged.
    pub fn resolve_config(
        &self,
        api_keys: &HashMap<String, String>,
    ) -> Result<Resolution, ConfigurationError> {
        let in_managed_env = is_managed_cloud_environment(self.env);
        let serialized = find_serialized_config(api_keys, self.config, self.env);
        let blob = serialized.as_ref().map(|s| s.blob.as_str());

        let strategy = match self.policy {
            CredentialPolicy::Explicit => Strategy::select(blob, in_managed_env).name(),
            CredentialPolicy::Chain => "credential-chain",
        };
        let config = resolve_with_policy(self.policy, blob, in_managed_env, self.env)?;

        Ok(Resolution {
            config,
            strategy,
            origin: serialized.map(|s| s.origin),
            in_managed_env,
            policy: self.policy,
        })
    }

    /// Builds a model handle for `model` through `factory`.
    ///
    /// # Errors
    ///
    /// Returns an error if credential resolution fails (the
    /// [`ConfigurationError`] stays reachable via `downcast_ref`) or the
    /// factory rejects the request.
    pub fn model_instance<F: ClientFactory>(
        &self,
        factory: &F,
        model: &str,
        api_keys: &HashMap<String, String>,
    ) -> Result<F::Model> {
        let resolution = self
            .resolve_config(api_keys)
            .context("Failed to resolve Amazon Bedrock configuration")?;
        tracing::info!(
            model,
            region = resolution.config.region(),
            strategy = resolution.strategy,
            "creating Bedrock model instance"
        );
        factory
            .language_model(resolution.config, model)
            .with_context(|| format!("Failed to create Bedrock model {model}"))
    }
}
