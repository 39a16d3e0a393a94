//! Prelude module for convenient imports.
//!
//! `use covalid::prelude::*;` brings in the entry points, the rule
//! constructors and the traits needed to call their builder methods.
//!
//! # Examples
//!
//! ```rust,ignore
//! use covalid::prelude::*;
//!
//! let name = rules![required(), length(3, 20)];
//! let tags = rules![each(rules![required()])];
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors
// ============================================================================

pub use crate::foundation::{
    DynRule, Error, MapValue, Rule, StructValue, ToValue, Validatable, ValidationContext,
    ValidationContextBuilder, ValidationError, ValidationErrors, Value, WithError,
};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{validate, validate_with_context};
pub use crate::rules;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{
    FieldRules, by, each, field, key, map, skip, validate_struct, validate_struct_with_context, when,
    with_context,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    empty, is_in, length, matches, max, min, multiple_of, nil, nil_or_not_empty, not_in, not_nil,
    required, rune_length, string_rule, string_rule_with_error,
};

#[cfg(feature = "temporal")]
pub use crate::validators::date;
