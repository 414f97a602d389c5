//! Hook settings for genhooks.
//!
//! This module defines the Settings struct read from an optional YAML file
//! passed with `--config`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Settings;
pub use types::ColorMode;
