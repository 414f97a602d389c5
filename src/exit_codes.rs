//! Exit code constants for the genhooks CLI.
//!
//! The templating driver only distinguishes zero from non-zero, but the
//! codes are kept distinct so wrapper scripts can tell failures apart:
//! - 0: Success
//! - 1: User error (bad args, unreadable context or settings)
//! - 2: Validation failure (pre-generation rules)
//! - 3: Filesystem failure (post-generation cleanup)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or malformed input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a template variable broke a pre-generation rule.
pub const VALIDATION_FAILURE: i32 = 2;

/// Filesystem failure: the generated tree could not be cleaned up.
pub const FILESYSTEM_FAILURE: i32 = 3;
