//! Recursive directory removal.
//!
//! A missing directory is not an error, and neither is a dangling symlink.
//! Anything else found at the path (a regular file, a live symlink) is
//! refused, neither followed nor deleted.

use crate::error::{HookError, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// What [`remove_dir_if_exists`] found at the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The directory existed and was removed with its contents.
    Removed,
    /// Nothing existed at the path.
    Absent,
}

/// Recursively delete the directory at `path` if it exists.
pub fn remove_dir_if_exists<P: AsRef<Path>>(path: P) -> Result<RemoveOutcome> {
    let path = path.as_ref();

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, nothing to remove", path.display());
            return Ok(RemoveOutcome::Absent);
        }
        Err(e) => {
            return Err(HookError::Filesystem(format!(
                "failed to inspect '{}': {}",
                path.display(),
                e
            )));
        }
    };

    if metadata.file_type().is_symlink() && is_dangling(path)? {
        debug!("{} is a dangling symlink, nothing to remove", path.display());
        return Ok(RemoveOutcome::Absent);
    }

    if !metadata.is_dir() {
        return Err(HookError::Filesystem(format!(
            "'{}' exists but is not a directory",
            path.display()
        )));
    }

    fs::remove_dir_all(path).map_err(|e| {
        HookError::Filesystem(format!(
            "failed to remove directory '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!("removed {}", path.display());
    Ok(RemoveOutcome::Removed)
}

/// True if the symlink at `path` points at nothing.
fn is_dangling(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(HookError::Filesystem(format!(
            "failed to inspect symlink target of '{}': {}",
            path.display(),
            e
        ))),
    }
}
