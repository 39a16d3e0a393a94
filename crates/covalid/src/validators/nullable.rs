//! Presence rules
//!
//! # Rules
//!
//! - [`required`] - rejects nil and empty values
//! - [`nil_or_not_empty`] - accepts nil, rejects present-but-empty values
//! - [`not_nil`] - rejects nil only
//!
//! # Examples
//!
//! ```rust,ignore
//! use covalid::prelude::*;
//!
//! assert!(validate(&Some("x"), &rules![required()]).is_ok());
//! assert!(validate(&None::<String>, &rules![nil_or_not_empty()]).is_ok());
//! assert!(validate(&Some(""), &rules![nil_or_not_empty()]).is_err());
//! ```

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_REQUIRED: ValidationError =
    ValidationError::from_static("validation_required", "cannot be blank");
pub const ERR_NIL_OR_NOT_EMPTY: ValidationError =
    ValidationError::from_static("validation_nil_or_not_empty_required", "cannot be blank");
pub const ERR_NOT_NIL: ValidationError =
    ValidationError::from_static("validation_not_nil_required", "is required");

/// Rejects blank values. See [`required`] and [`nil_or_not_empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRule {
    condition: bool,
    skip_nil: bool,
    err: ValidationError,
}

/// Fails for nil and empty values.
pub const fn required() -> RequiredRule {
    RequiredRule {
        condition: true,
        skip_nil: false,
        err: ERR_REQUIRED,
    }
}

/// Fails for values that are present but empty; nil passes.
pub const fn nil_or_not_empty() -> RequiredRule {
    RequiredRule {
        condition: true,
        skip_nil: true,
        err: ERR_NIL_OR_NOT_EMPTY,
    }
}

impl RequiredRule {
    /// Applies the rule only if `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }
}

impl Rule for RequiredRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if !self.condition {
            return Ok(());
        }
        let blank = match value.indirect() {
            None => !self.skip_nil,
            Some(v) => v.is_empty(),
        };
        if blank { Err(self.err.clone().into()) } else { Ok(()) }
    }
}

/// Rejects nil. See [`not_nil`].
#[derive(Debug, Clone, PartialEq)]
pub struct NotNilRule {
    err: ValidationError,
}

/// Fails for nil values; empty values pass.
pub const fn not_nil() -> NotNilRule {
    NotNilRule { err: ERR_NOT_NIL }
}

impl Rule for NotNilRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        match value.indirect() {
            None => Err(self.err.clone().into()),
            Some(_) => Ok(()),
        }
    }
}

impl_with_error!(RequiredRule, NotNilRule);
