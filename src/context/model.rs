//! GenerationContext struct definition and the E2E selection flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The template variables consumed by the hooks.
///
/// Missing fields default to empty strings (and an unselected E2E flag).
/// Unknown keys are ignored so the driver can pass its full context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationContext {
    /// Contact email; trimmed before the template is rendered.
    pub email: String,

    /// Project directory name. Must be lowercase.
    pub project_slug: String,

    /// Application package name. Must be a lowercase identifier.
    pub app_slug: String,

    /// Author display name. Must not contain backslashes.
    pub author_name: String,

    /// Whether the E2E test suite should be kept in the generated tree.
    #[serde(alias = "use_cypress")]
    pub use_e2e_tests: E2eFlag,
}

/// A `"y"`/`"n"` template flag.
///
/// The raw value is kept as given so it can be written back unchanged; only
/// the exact string `"y"` counts as selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFlag")]
pub struct E2eFlag(String);

impl E2eFlag {
    /// Raw value that selects the E2E suite.
    pub const SELECTED: &'static str = "y";

    /// Raw value written when the suite is not selected.
    pub const NOT_SELECTED: &'static str = "n";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns true only for the exact value `"y"`.
    pub fn is_selected(&self) -> bool {
        self.0 == Self::SELECTED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for E2eFlag {
    fn default() -> Self {
        Self::new(Self::NOT_SELECTED)
    }
}

impl fmt::Display for E2eFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted on-disk shapes of the flag.
///
/// Drivers that render booleans natively send `true`/`false` instead of
/// the `"y"`/`"n"` strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Text(String),
    Bool(bool),
}

impl From<RawFlag> for E2eFlag {
    fn from(raw: RawFlag) -> Self {
        match raw {
            RawFlag::Text(s) => E2eFlag::new(s),
            RawFlag::Bool(true) => E2eFlag::new(E2eFlag::SELECTED),
            RawFlag::Bool(false) => E2eFlag::new(E2eFlag::NOT_SELECTED),
        }
    }
}
