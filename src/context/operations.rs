//! Context loading, overrides and normalization.

use super::model::{E2eFlag, GenerationContext};
use crate::error::{HookError, Result};
use log::debug;
use std::path::Path;

/// Key under which cookiecutter-style replay files nest the variables.
const NAMESPACE_KEY: &str = "cookiecutter";

impl GenerationContext {
    /// Load a context from a JSON or YAML file.
    ///
    /// The format is picked from the extension (`.yaml`/`.yml` for YAML,
    /// anything else is parsed as JSON).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading generation context from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            HookError::UserError(format!(
                "failed to read context file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse a context from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| HookError::UserError(format!("failed to parse context JSON: {}", e)))?;

        let nested = value
            .get_mut(NAMESPACE_KEY)
            .filter(|v| v.is_object())
            .map(serde_json::Value::take);
        if let Some(inner) = nested {
            value = inner;
        }

        serde_json::from_value(value)
            .map_err(|e| HookError::UserError(format!("invalid context JSON: {}", e)))
    }

    /// Parse a context from a YAML document.
    ///
    /// An empty document yields the default context.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut value: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| HookError::UserError(format!("failed to parse context YAML: {}", e)))?;

        if value.is_null() {
            return Ok(Self::default());
        }

        let nested = value
            .get(NAMESPACE_KEY)
            .filter(|v| v.is_mapping())
            .cloned();
        if let Some(inner) = nested {
            value = inner;
        }

        serde_yaml::from_value(value)
            .map_err(|e| HookError::UserError(format!("invalid context YAML: {}", e)))
    }

    /// Apply a single `key=value` override.
    ///
    /// Only the keys the hooks consume are accepted; anything else is a
    /// user error.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            HookError::UserError(format!(
                "invalid override '{}': expected KEY=VALUE",
                assignment
            ))
        })?;

        match key.trim() {
            "email" => self.email = value.to_string(),
            "project_slug" => self.project_slug = value.to_string(),
            "app_slug" => self.app_slug = value.to_string(),
            "author_name" => self.author_name = value.to_string(),
            "use_e2e_tests" | "use_cypress" => self.use_e2e_tests = E2eFlag::new(value),
            other => {
                return Err(HookError::UserError(format!(
                    "unknown context variable '{}' (expected one of: email, project_slug, \
                     app_slug, author_name, use_e2e_tests)",
                    other
                )));
            }
        }

        Ok(())
    }

    /// Apply every override in order; later assignments win.
    pub fn apply_overrides<S: AsRef<str>>(&mut self, assignments: &[S]) -> Result<()> {
        for assignment in assignments {
            self.apply_override(assignment.as_ref())?;
        }
        Ok(())
    }

    /// Strip leading and trailing whitespace from `email`, in place.
    ///
    /// Idempotent: a trimmed address is left untouched.
    pub fn normalize_email(&mut self) {
        let trimmed = self.email.trim();
        if trimmed.len() != self.email.len() {
            self.email = trimmed.to_string();
        }
    }

    /// Serialize the context to pretty JSON for the driver.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HookError::UserError(format!("failed to serialize context: {}", e)))
    }
}
