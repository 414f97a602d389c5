//! Post-generation cleanup.
//!
//! Runs inside the freshly generated project. When the user did not select
//! the E2E test suite, its directory is removed. The completion message is
//! emitted last, after any cleanup succeeded.

use crate::config::Settings;
use crate::context::E2eFlag;
use crate::error::Result;
use crate::fs::{RemoveOutcome, remove_dir_if_exists};
use crate::report::Reporter;
use log::debug;
use std::path::{Path, PathBuf};

pub const E2E_REMOVED_MESSAGE: &str = "Removed E2E test files (Cypress not selected)";
pub const COMPLETION_MESSAGE: &str = "Project initialized, keep up the good work!";

/// What the post-gen hook did with the E2E directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The directory was deleted.
    Removed(PathBuf),
    /// E2E tests were selected; nothing was touched.
    Kept,
    /// E2E tests were not selected but the directory did not exist.
    Absent,
}

/// Run the post-generation hook against `output_root`.
///
/// A deletion failure propagates before the completion message is emitted.
pub fn run_post_gen(
    output_root: &Path,
    use_e2e_tests: &E2eFlag,
    settings: &Settings,
    reporter: &mut dyn Reporter,
) -> Result<CleanupOutcome> {
    let outcome = remove_unselected_e2e(output_root, use_e2e_tests, settings, reporter)?;
    reporter.success(COMPLETION_MESSAGE);
    Ok(outcome)
}

fn remove_unselected_e2e(
    output_root: &Path,
    use_e2e_tests: &E2eFlag,
    settings: &Settings,
    reporter: &mut dyn Reporter,
) -> Result<CleanupOutcome> {
    if use_e2e_tests.is_selected() {
        debug!("E2E tests selected, keeping {}", settings.e2e_dir);
        return Ok(CleanupOutcome::Kept);
    }

    let e2e_dir = settings.e2e_path(output_root);
    match remove_dir_if_exists(&e2e_dir)? {
        RemoveOutcome::Removed => {
            reporter.info(E2E_REMOVED_MESSAGE);
            Ok(CleanupOutcome::Removed(e2e_dir))
        }
        RemoveOutcome::Absent => Ok(CleanupOutcome::Absent),
    }
}
