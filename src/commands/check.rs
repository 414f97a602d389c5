//! Implementation of the `genhooks check` command.

use super::resolve_context;
use crate::cli::CheckArgs;
use crate::config::Settings;
use crate::error::{HookError, Result};
use crate::report::{ConsoleReporter, Reporter};
use crate::validate::check_context;

pub const CHECK_PASSED_MESSAGE: &str = "All template variables are valid.";

/// Execute the `genhooks check` command.
///
/// Unlike `pre-gen`, every broken rule is reported in one go.
pub fn cmd_check(args: CheckArgs, settings: &Settings) -> Result<()> {
    let mut reporter = ConsoleReporter::new(settings.use_color());
    check_with_reporter(args, &mut reporter)
}

pub(super) fn check_with_reporter(args: CheckArgs, reporter: &mut dyn Reporter) -> Result<()> {
    let mut ctx = resolve_context(&args.context)?;
    ctx.normalize_email();

    let failures = check_context(&ctx);
    if !failures.is_empty() {
        return Err(HookError::ValidationReport(failures));
    }

    reporter.success(CHECK_PASSED_MESSAGE);
    Ok(())
}
