//! # covalid
//!
//! Declarative, composable validation of dynamic values.
//!
//! Rules are small immutable values implementing [`Rule`]. They are
//! grouped into lists with [`rules!`] and applied to anything that
//! implements [`ToValue`]: scalars, strings, collections, JSON documents
//! and user structs described as [`StructValue`]s.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use covalid::prelude::*;
//!
//! validate("bob", &rules![required(), length(3, 20)])?;
//!
//! validate_struct(&address, [
//!     field("Street", rules![required(), length(5, 50)]),
//!     field("Zip", rules![required(), matches(Regex::new(r"^[0-9]{5}$")?)]),
//! ])?;
//! ```
//!
//! ## Errors
//!
//! Every entry point returns [`Error`]:
//!
//! - [`Error::Validation`] when a single value fails a rule
//! - [`Error::Fields`] when struct fields, map keys or elements fail; the
//!   aggregate is sorted by key and nests for nested values
//! - [`Error::Internal`] when validation cannot be carried out; this aborts
//!   any aggregation in progress
//!
//! ## Features
//!
//! - `formats` (default): the [`is`] module of format rules
//! - `temporal` (default): the [`date`] rule, chrono conversions and
//!   timestamp thresholds

// ValidationError is returned by value from every rule; boxing it would add
// an allocation to each failure.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod engine;
pub mod foundation;
#[cfg(feature = "formats")]
pub mod is;
mod macros;
pub mod prelude;
pub mod validators;

pub use combinators::{
    EachRule, FieldRules, InlineRule, KeyRules, MapRule, SkipRule, WhenRule, by, each, field, key,
    map, skip, validate_struct, validate_struct_value, validate_struct_with_context, when,
    with_context,
};
pub use engine::{apply_rules, validate, validate_value, validate_with_context};
pub use foundation::{
    DynRule, Error, InternalError, MapValue, Rule, StructValue, StructuralError, ToValue,
    Validatable, ValidationContext, ValidationError, ValidationErrors, Value, WithError,
};
#[allow(clippy::wildcard_imports)]
pub use validators::*;
