//! Generation context for the hooks.
//!
//! The driver hands the hooks the template variables it collected from the
//! user. This module turns them into a typed [`GenerationContext`], read from
//! a JSON or YAML file (flat, or nested under a `cookiecutter` key) and
//! optionally patched with `key=value` overrides from the command line.

mod model;
mod operations;


pub use model::{E2eFlag, GenerationContext};
