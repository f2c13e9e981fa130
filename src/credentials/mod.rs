//! Credential resolution for Amazon Bedrock.
//!
//! Turns an optional serialized JSON blob plus the managed-environment signal
//! into a normalized [`BedrockConfig`]. The decision is an explicit
//! [`Strategy`] so each row of the decision table can be tested on its own.

mod resolve;
mod strategy;
mod types;

pub use resolve::{resolve, resolve_region_only, resolve_with, resolve_with_policy};
pub use strategy::{CredentialPolicy, Strategy};
pub use types::BedrockConfig;
