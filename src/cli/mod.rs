//! CLI argument parsing for genhooks.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::ColorMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// genhooks: pre- and post-generation hooks for project templates.
///
/// The templating driver calls `pre-gen` before rendering and `post-gen`
/// from inside the generated project afterwards.
#[derive(Parser, Debug)]
#[command(name = "genhooks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (YAML).
    #[arg(long, global = true, env = "GENHOOKS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to color hook messages (overrides the settings file).
    #[arg(long, global = true, value_enum, env = "GENHOOKS_COLOR")]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for genhooks.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate template variables before generation.
    ///
    /// Trims the email, then checks the slugs and author name. Exits
    /// non-zero on the first broken rule so the driver stops.
    PreGen(PreGenArgs),

    /// Clean up the generated project.
    ///
    /// Removes the E2E test suite unless it was selected, then reports
    /// completion.
    PostGen(PostGenArgs),

    /// Report every broken validation rule without generating anything.
    Check(CheckArgs),
}

/// Where the generation context comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Context file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(short, long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Override a context variable (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// Arguments for the `pre-gen` command.
#[derive(Args, Debug, Clone, Default)]
pub struct PreGenArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the normalized context as JSON on success.
    #[arg(long)]
    pub emit_context: bool,
}

/// Arguments for the `post-gen` command.
#[derive(Args, Debug, Clone, Default)]
pub struct PostGenArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Root of the generated project (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub context: ContextArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
