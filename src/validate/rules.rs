//! The pre-generation rules and the pre-gen hook entry point.

use super::identifier::{is_identifier, is_lowercase};
use crate::context::GenerationContext;
use crate::error::Result;
use log::debug;
use std::fmt;
use thiserror::Error;

/// Which slug variable a lowercase failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugField {
    Project,
    App,
}

impl fmt::Display for SlugField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugField::Project => f.write_str("project slug"),
            SlugField::App => f.write_str("app slug"),
        }
    }
}

/// A single broken rule, carrying the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("'{value}' {field} should be all lowercase")]
    SlugNotLowercase { field: SlugField, value: String },

    #[error("'{value}' app slug is not a valid identifier")]
    InvalidIdentifier { value: String },

    #[error("'{value}' author name must not include backslashes")]
    BackslashInName { value: String },
}

/// Evaluate every rule against `ctx` and return the failures in rule order.
///
/// Pure: the context is not modified.
pub fn check_context(ctx: &GenerationContext) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    debug!("checking project_slug '{}'", ctx.project_slug);
    if !is_lowercase(&ctx.project_slug) {
        failures.push(ValidationFailure::SlugNotLowercase {
            field: SlugField::Project,
            value: ctx.project_slug.clone(),
        });
    }

    debug!("checking app_slug '{}'", ctx.app_slug);
    if !is_identifier(&ctx.app_slug) {
        failures.push(ValidationFailure::InvalidIdentifier {
            value: ctx.app_slug.clone(),
        });
    }
    if !is_lowercase(&ctx.app_slug) {
        failures.push(ValidationFailure::SlugNotLowercase {
            field: SlugField::App,
            value: ctx.app_slug.clone(),
        });
    }

    debug!("checking author_name '{}'", ctx.author_name);
    if ctx.author_name.contains('\\') {
        failures.push(ValidationFailure::BackslashInName {
            value: ctx.author_name.clone(),
        });
    }

    failures
}

/// Run the pre-generation hook.
///
/// Trims `email` in place, then fails with the first broken rule. On
/// success the (normalized) context is ready for rendering.
pub fn run_pre_gen(ctx: &mut GenerationContext) -> Result<()> {
    ctx.normalize_email();

    match check_context(ctx).into_iter().next() {
        Some(failure) => Err(failure.into()),
        None => Ok(()),
    }
}
