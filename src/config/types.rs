//! Setting types and default value functions.

use serde::{Deserialize, Serialize};

/// Relative path of the E2E test suite inside a generated project.
pub const DEFAULT_E2E_DIR: &str = "tests/e2e";

/// Environment variable that disables color in `auto` mode.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// When to color hook messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset (default).
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl ColorMode {
    /// Decide whether to color, given the environment facts `auto` looks at.
    pub fn resolve(self, is_terminal: bool, no_color_set: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal && !no_color_set,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub fn default_e2e_dir() -> String {
    DEFAULT_E2E_DIR.to_string()
}
