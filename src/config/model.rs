//! Settings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for the hooks.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory removed by the post-gen hook when E2E tests are not
    /// selected, relative to the generated project root.
    #[serde(default = "default_e2e_dir")]
    pub e2e_dir: String,

    /// When to color hook messages. The `--color` flag takes precedence.
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            e2e_dir: default_e2e_dir(),
            color: ColorMode::default(),
        }
    }
}
