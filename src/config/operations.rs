//! Settings loading, validation, and utility operations.

use super::model::Settings;
use super::types::NO_COLOR_ENV;
use crate::error::{HookError, Result};
use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(HookError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HookError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)
            .map_err(|e| HookError::UserError(format!("failed to parse settings YAML: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate setting values.
    ///
    /// Validation rules:
    /// - `e2e_dir` must be non-empty
    /// - `e2e_dir` must be relative and must not contain `..` or `.`
    /// - `e2e_dir` must name at least one directory below the project root
    pub fn validate(&self) -> Result<()> {
        if self.e2e_dir.trim().is_empty() {
            return Err(HookError::UserError(
                "settings validation failed: e2e_dir must be non-empty".to_string(),
            ));
        }

        let path = Path::new(&self.e2e_dir);
        if path.is_absolute() || path.has_root() {
            return Err(HookError::UserError(format!(
                "settings validation failed: e2e_dir must be relative to the project root (found '{}')",
                self.e2e_dir
            )));
        }
        if !names_subdirectory(path) {
            return Err(HookError::UserError(format!(
                "settings validation failed: e2e_dir must name a directory below the project root (found '{}')",
                self.e2e_dir
            )));
        }
        if path_contains_traversal(path) {
            return Err(HookError::UserError(format!(
                "settings validation failed: e2e_dir must stay inside the project root (found '{}')",
                self.e2e_dir
            )));
        }

        Ok(())
    }

    /// Absolute location of the E2E directory under `output_root`.
    pub fn e2e_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.e2e_dir)
    }

    /// Whether console messages should be colored.
    pub fn use_color(&self) -> bool {
        let no_color_set = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
        self.color
            .resolve(std::io::stdout().is_terminal(), no_color_set)
    }
}

/// True if `path` has a normal component and no `.` component, so it can
/// never resolve to the directory it is joined onto.
pub fn names_subdirectory(path: &Path) -> bool {
    let mut has_normal = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => return false,
            _ => {}
        }
    }
    has_normal
}

/// Check whether a path contains `..` components.
pub fn path_contains_traversal(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::ParentDir))
}
