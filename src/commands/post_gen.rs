//! Implementation of the `genhooks post-gen` command.

use super::resolve_context;
use crate::cleanup::run_post_gen;
use crate::cli::PostGenArgs;
use crate::config::Settings;
use crate::error::{HookError, Result};
use crate::report::ConsoleReporter;
use log::debug;

/// Execute the `genhooks post-gen` command.
///
/// The driver runs this from the generated project root, so the current
/// directory is the default output root.
pub fn cmd_post_gen(args: PostGenArgs, settings: &Settings) -> Result<()> {
    let ctx = resolve_context(&args.context)?;

    let output_root = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| {
            HookError::UserError(format!("failed to determine current directory: {}", e))
        })?,
    };

    if !output_root.is_dir() {
        return Err(HookError::UserError(format!(
            "output directory '{}' does not exist",
            output_root.display()
        )));
    }

    let mut reporter = ConsoleReporter::new(settings.use_color());
    let outcome = run_post_gen(&output_root, &ctx.use_e2e_tests, settings, &mut reporter)?;
    debug!("post-gen cleanup outcome: {:?}", outcome);

    Ok(())
}
