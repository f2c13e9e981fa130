//! Entry point for `bedrock`, a diagnostic CLI for the Bedrock provider shim.
//!
//! Loads environment variables, parses CLI arguments via [`cli`], and
//! dispatches to the appropriate subcommand handler.

mod cli;
mod logging;
mod output;

use std::process::ExitCode;

/// Runs the bedrock CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments, and dispatches the chosen subcommand. Errors are printed once
/// with their cause chain.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
