//! Amazon Bedrock provider shim.
//!
//! Maps a logical model name to a Bedrock model handle, resolving credentials
//! either from an explicit JSON blob (`AWS_BEDROCK_CONFIG`) or from the
//! ambient credentials of a managed AWS environment (Lambda, ECS, EC2).

pub mod config;
pub mod constants;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod provider;

pub use credentials::{resolve, BedrockConfig, CredentialPolicy, Strategy};
pub use environment::is_managed_cloud_environment;
pub use error::ConfigurationError;
pub use provider::{BedrockClient, BedrockProvider, ClientFactory};
