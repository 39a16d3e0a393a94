//! Built-in leaf rules
//!
//! Every rule here follows the same conventions:
//!
//! - Nil input passes, and so does empty input, except for the presence
//!   rules whose whole point is to reject it
//! - The failure is a [`ValidationError`](crate::ValidationError) with a
//!   stable code, overridable through [`WithError`](crate::WithError)
//! - Configuration methods return a new rule; the `ERR_*` templates are
//!   never changed in place
//!
//! # Categories
//!
//! - **Presence**: [`required`], [`nil_or_not_empty`], [`not_nil`], [`nil`], [`empty`]
//! - **Text**: [`length`], [`rune_length`], [`matches`], [`string_rule`], [`date`]
//! - **Numeric**: [`min`], [`max`], [`multiple_of`]
//! - **Membership**: [`is_in`], [`not_in`]

// Presence
pub mod absent;
pub mod nullable;

// Text
pub mod length;
pub mod pattern;
pub mod string;
#[cfg(feature = "temporal")]
pub mod time;

// Numeric
pub mod divisibility;
pub mod range;

// Membership
pub mod membership;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use absent::{AbsentRule, ERR_EMPTY, ERR_NIL, empty, nil};
pub use divisibility::{ERR_MULTIPLE_OF_INVALID, MultipleOfRule, ZeroBase, multiple_of};
pub use length::{
    ERR_LENGTH_EMPTY_REQUIRED, ERR_LENGTH_INVALID, ERR_LENGTH_OUT_OF_RANGE, ERR_LENGTH_TOO_LONG,
    ERR_LENGTH_TOO_SHORT, ERR_LENGTH_UNSUPPORTED, LengthMode, LengthRule, length, rune_length,
};
pub use membership::{ERR_IN_INVALID, ERR_NOT_IN_INVALID, InRule, is_in, not_in};
pub use nullable::{
    ERR_NIL_OR_NOT_EMPTY, ERR_NOT_NIL, ERR_REQUIRED, NotNilRule, RequiredRule, nil_or_not_empty,
    not_nil, required,
};
pub use pattern::{ERR_MATCH_INVALID, MatchRule, matches};
pub use range::{
    ERR_MAX_LESS_EQUAL_THAN_REQUIRED, ERR_MAX_LESS_THAN_REQUIRED,
    ERR_MIN_GREATER_EQUAL_THAN_REQUIRED, ERR_MIN_GREATER_THAN_REQUIRED, ThresholdRule, max, min,
};
pub use string::{StringRule, string_rule, string_rule_with_error};
#[cfg(feature = "temporal")]
pub use time::{DateRule, ERR_DATE_INVALID, ERR_DATE_OUT_OF_RANGE, date};
