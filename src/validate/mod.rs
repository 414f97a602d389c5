//! Pre-generation validation for genhooks.
//!
//! Deterministic checks on the template variables, run before the driver
//! writes any files:
//! - Slugs must be lowercase
//! - The app slug must be a valid identifier
//! - The author name must not contain backslashes

pub mod identifier;
pub mod rules;


pub use identifier::{is_identifier, is_lowercase};
pub use rules::{SlugField, ValidationFailure, check_context, run_pre_gen};
