//! Process environment access and managed-environment detection.
//!
//! Everything that reads environment variables goes through [`EnvSource`],
//! so the decision logic can be exercised against a plain map in tests
//! instead of the real process environment.

mod gate;
mod source;

pub use gate::{detected_markers, is_managed_cloud_environment, region_from_env};
pub use source::{EnvSource, ProcessEnv};
