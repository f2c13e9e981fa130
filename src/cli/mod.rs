//! Command-line interface definition and dispatch.
//!
//! Uses [`clap`] for argument parsing with derive macros. Every subcommand is
//! a read-only view over the provider pipeline; nothing is written to disk.

use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use bedrock_provider::config::Config;
use bedrock_provider::constants::{CONFIG_ENV_KEY, PROVIDER_NAME};
use bedrock_provider::credentials::CredentialPolicy;
use bedrock_provider::environment::{detected_markers, region_from_env, EnvSource, ProcessEnv};
use bedrock_provider::provider::{
    resolve_model, BedrockClient, BedrockModel, BedrockProvider, Resolution,
};

use crate::{logging, output};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(name = "bedrock", about = "Amazon Bedrock provider shim diagnostics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands. The `///` doc comments on variants double as
/// `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve credentials and build a model handle
    Resolve {
        /// Model id to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// Serialized credential blob, takes precedence over config and AWS_BEDROCK_CONFIG
        #[arg(long)]
        config_json: Option<String>,
        /// Credential policy (overrides config)
        #[arg(long, value_enum)]
        policy: Option<CredentialPolicy>,
        /// Print machine-readable JSON (secrets omitted)
        #[arg(long)]
        json: bool,
    },
    /// Show managed AWS environment detection
    Env,
    /// List known Bedrock models
    Models,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the config path and effective config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Loads config, installs logging, and routes each [`Commands`] variant to
/// its handler.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    logging::init(&config);

    match cli.command {
        Commands::Resolve {
            model,
            config_json,
            policy,
            json,
        } => resolve(&config, model.as_deref(), config_json, policy, json),
        Commands::Env => {
            show_env(&ProcessEnv);
            Ok(())
        }
        Commands::Models => {
            let selection = resolve_model(None, &config);
            let provider = BedrockProvider::new(&config, &ProcessEnv);
            println!("{} models:\n", provider.name().bold());
            for info in provider.static_models() {
                println!("{}", output::format_model_row(info, info.name == selection.model));
            }
            if selection.info.is_none() {
                println!("\n  configured: {} {}", selection.model.yellow(), "(not in catalog)".dimmed());
            }
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let path = Config::config_path()?;
                println!("{} {}", "Config path:".bold(), path.display());
                println!();
                println!("{}", toml::to_string_pretty(&redacted(&config))?);
                Ok(())
            }
        },
    }
}

fn resolve(
    config: &Config,
    model: Option<&str>,
    config_json: Option<String>,
    policy: Option<CredentialPolicy>,
    json: bool,
) -> Result<()> {
    let (resolution, handle) = build_report(config, &ProcessEnv, model, config_json, policy)?;

    if json {
        let value = serde_json::json!({
            "model": handle.model_id,
            "endpoint": handle.endpoint,
            "region": resolution.config.region(),
            "strategy": resolution.strategy,
            "managedEnvironment": resolution.in_managed_env,
            "configSource": resolution.origin.map(|o| o.to_string()),
            "credentials": handle.credentials.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output::format_resolution(&resolution, &handle));
    }
    Ok(())
}

/// Builds the model handle through the provider's main entry point, plus the
/// resolution details shown alongside it.
fn build_report(
    config: &Config,
    env: &dyn EnvSource,
    model: Option<&str>,
    config_json: Option<String>,
    policy: Option<CredentialPolicy>,
) -> Result<(Resolution, BedrockModel)> {
    let selection = resolve_model(model, config);

    let mut api_keys = HashMap::new();
    if let Some(blob) = config_json {
        api_keys.insert(PROVIDER_NAME.to_string(), blob);
    }

    let mut provider = BedrockProvider::new(config, env);
    if let Some(policy) = policy {
        provider = provider.with_policy(policy);
    }

    let handle = provider.model_instance(&BedrockClient, &selection.model, &api_keys)?;
    let resolution = provider.resolve_config(&api_keys)?;
    Ok((resolution, handle))
}

fn show_env(env: &dyn EnvSource) {
    let markers = detected_markers(env);
    let managed = if markers.is_empty() {
        "no".red()
    } else {
        "yes".green()
    };
    println!("{} {}", "managed AWS environment:".bold(), managed);
    for marker in &markers {
        println!("  {} {}", "marker:".dimmed(), marker);
    }
    println!("{} {}", "region:".bold(), region_from_env(env));
    let blob = if env.non_empty(CONFIG_ENV_KEY).is_some() {
        "set"
    } else {
        "unset"
    };
    println!("{} {}", format!("{CONFIG_ENV_KEY}:").bold(), blob);
}

/// Copy of `config` safe to print: the credential blob is replaced.
fn redacted(config: &Config) -> Config {
    let mut config = config.clone();
    if let Some(entry) = config.provider.bedrock.as_mut() {
        if entry.config.is_some() {
            entry.config = Some("<redacted>".to_string());
        }
    }
    config
}
