//! Filesystem utilities for genhooks.
//!
//! The post-gen hook only ever deletes; these helpers keep the
//! existence checks and error messages for that in one place.

mod remove_dir;

pub use remove_dir::{RemoveOutcome, remove_dir_if_exists};
