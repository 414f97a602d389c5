//! Command implementations for genhooks.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the context and settings resolution they share.

mod check;
mod post_gen;
mod pre_gen;


use crate::cli::{Cli, Command, ContextArgs};
use crate::config::{ColorMode, Settings};
use crate::context::GenerationContext;
use crate::error::Result;
use log::debug;
use std::path::Path;

pub use check::cmd_check;
pub use post_gen::cmd_post_gen;
pub use pre_gen::cmd_pre_gen;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref(), cli.color)?;

    match cli.command {
        Command::PreGen(args) => cmd_pre_gen(args),
        Command::PostGen(args) => cmd_post_gen(args, &settings),
        Command::Check(args) => cmd_check(args, &settings),
    }
}

/// Load settings from `path` (defaults when absent) and apply the CLI
/// color override.
pub(crate) fn load_settings(path: Option<&Path>, color: Option<ColorMode>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(color) = color {
        settings.color = color;
    }

    debug!("resolved settings: {:?}", settings);
    Ok(settings)
}

/// Build the generation context from the context file and overrides.
///
/// Without a file the context starts from defaults.
pub(crate) fn resolve_context(args: &ContextArgs) -> Result<GenerationContext> {
    let mut ctx = match &args.context {
        Some(path) => GenerationContext::load(path)?,
        None => GenerationContext::default(),
    };

    ctx.apply_overrides(&args.overrides)?;
    Ok(ctx)
}
