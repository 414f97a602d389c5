//! genhooks: pre- and post-generation hooks for project templates.
//!
//! This is the main entry point for the `genhooks` CLI. It parses arguments,
//! dispatches to the appropriate hook, and maps errors to exit codes so the
//! templating driver stops on failure.

mod cleanup;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod report;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
