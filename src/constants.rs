//! Centralized constants for bedrock-provider.
//!
//! Environment variable names, defaults, and provider metadata live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "bedrock-provider";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "bedrock-provider.toml";

// --- Provider metadata ---

/// Provider name, also the key looked up in per-request API key maps.
pub const PROVIDER_NAME: &str = "AmazonBedrock";

/// Where users create credentials for this provider.
pub const API_KEY_LINK: &str = "https://console.aws.amazon.com/iam/home";

/// Environment variable holding the serialized JSON credential blob.
pub const CONFIG_ENV_KEY: &str = "AWS_BEDROCK_CONFIG";

/// Default model when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

// --- Region ---

/// Primary region variable.
pub const REGION_ENV: &str = "AWS_REGION";

/// Secondary region variable, consulted when [`REGION_ENV`] is unset.
pub const DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Region used when no region variable is set.
pub const FALLBACK_REGION: &str = "us-east-1";

// --- Managed environment markers ---

/// Variables whose presence means the process runs on managed AWS compute
/// (Lambda, ECS task, EC2 instance) with an ambient credential source.
pub const MANAGED_ENV_MARKERS: &[&str] = &[
    "AWS_EXECUTION_ENV",
    "AWS_LAMBDA_FUNCTION_NAME",
    "ECS_CONTAINER_METADATA_URI",
    "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
    "AWS_EC2_METADATA_TOKEN",
];

// --- Logging defaults ---

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default log output format.
pub const DEFAULT_LOG_FORMAT: &str = "pretty";
