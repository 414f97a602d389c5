//! Error types for the genhooks CLI.
//!
//! Uses thiserror for derive macros and keeps every message actionable:
//! the offending value or path is always part of the text.

use crate::exit_codes;
use crate::validate::ValidationFailure;
use thiserror::Error;

/// Main error type for hook operations.
#[derive(Error, Debug)]
pub enum HookError {
    /// User provided invalid arguments or unreadable input files.
    #[error("{0}")]
    UserError(String),

    /// A template variable failed a pre-generation rule.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Several rules failed at once (reported by `check`).
    #[error("Validation failed with {} error(s):\n{}", .0.len(), format_failures(.0))]
    ValidationReport(Vec<ValidationFailure>),

    /// The generated tree could not be modified.
    #[error("Filesystem operation failed: {0}")]
    Filesystem(String),
}

impl HookError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::UserError(_) => exit_codes::USER_ERROR,
            HookError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            HookError::ValidationReport(_) => exit_codes::VALIDATION_FAILURE,
            HookError::Filesystem(_) => exit_codes::FILESYSTEM_FAILURE,
        }
    }
}

fn format_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  - {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = HookError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = HookError::from(ValidationFailure::InvalidIdentifier {
            value: "1bad".to_string(),
        });
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);

        let err = HookError::ValidationReport(vec![]);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn filesystem_error_has_correct_exit_code() {
        let err = HookError::Filesystem("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::FILESYSTEM_FAILURE);
    }

    #[test]
    fn validation_message_names_the_value() {
        let err = HookError::from(ValidationFailure::BackslashInName {
            value: "J\\ane".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Validation failed: "));
        assert!(msg.contains("J\\ane"));
    }

    #[test]
    fn report_lists_every_failure() {
        let err = HookError::ValidationReport(vec![
            ValidationFailure::InvalidIdentifier {
                value: "1bad".to_string(),
            },
            ValidationFailure::BackslashInName {
                value: "a\\b".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 error(s)"));
        assert!(msg.contains("  - '1bad'"));
        assert!(msg.contains("a\\b"));
    }
}
