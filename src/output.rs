//! Terminal formatting for CLI output.

use colored::Colorize;
use std::fmt::Display;

use bedrock_provider::provider::{BedrockModel, ModelInfo, Resolution};

/// Prints an error and its cause chain to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

/// Masks a secret, keeping at most the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

fn row(label: &str, value: impl Display) -> String {
    format!("{}{}", format!("{label:<18}").bold(), value)
}

fn masked(value: Option<&str>) -> String {
    value
        .map(mask_secret)
        .unwrap_or_else(|| "(none)".dimmed().to_string())
}

/// Renders a resolution and the model handle built from it.
pub fn format_resolution(resolution: &Resolution, model: &BedrockModel) -> String {
    let config = &resolution.config;
    let origin = resolution
        .origin
        .map(|o| o.to_string())
        .unwrap_or_else(|| "none".to_string());
    let lines = [
        row("model:", model.model_id.yellow()),
        row("endpoint:", &model.endpoint),
        row("managed env:", resolution.in_managed_env),
        row("policy:", format!("{:?}", resolution.policy)),
        row("strategy:", resolution.strategy.cyan()),
        row("config source:", origin),
        row("region:", config.region()),
        row("access key id:", masked(config.access_key_id())),
        row("secret key:", masked(config.secret_access_key())),
        row("session token:", masked(config.session_token())),
        row("credentials:", model.credentials.as_str()),
    ];
    lines.join("\n")
}

/// Renders one catalog row, marking the selected model.
pub fn format_model_row(info: &ModelInfo, selected: bool) -> String {
    let marker = if selected { " (default)" } else { "" };
    format!(
        "  {}{}\n    {} {}",
        info.name,
        marker.green(),
        info.label.dimmed(),
        format!("[{} tokens]", info.max_tokens).dimmed()
    )
}
