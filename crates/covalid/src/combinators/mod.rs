//! Combinators for composing rules
//!
//! Composite rules walk into structured values and aggregate the failures
//! of their parts; conditional rules decide whether, and which, rules run.
//!
//! # Composite
//!
//! - [`field`] / [`validate_struct`] - selected fields of a struct
//! - [`map`] / [`key`] - selected keys of a map
//! - [`each`] - every element of a list or map
//!
//! # Conditional
//!
//! - [`skip`] - stop evaluating the current rule list
//! - [`when`] - pick a rule list by condition
//! - [`by`] / [`with_context`] - ad-hoc rules from closures
//!
//! # Examples
//!
//! ```rust,ignore
//! use covalid::prelude::*;
//!
//! validate_struct(&order, [
//!     field("Id", rules![required()]),
//!     field("Lines", rules![required(), each(rules![nil_or_not_empty()])]),
//!     field("Coupon", rules![skip().when(order.coupon.is_none()), length(6, 6)]),
//! ])?;
//! ```

mod each;
mod field;
mod inline;
mod map;
pub(crate) mod nested;
mod skip;
mod when;

pub use each::{EachRule, each};
pub use field::{
    FieldRules, field, validate_struct, validate_struct_value, validate_struct_with_context,
};
pub use inline::{InlineRule, by, with_context};
pub use map::{ERR_KEY_MISSING, ERR_KEY_UNEXPECTED, ERR_KEY_WRONG_TYPE, KeyRules, MapRule, key, map};
pub use skip::{SkipRule, skip};
pub use when::{WhenRule, when};
