//! Length rules
//!
//! [`length`] measures text in bytes; [`rune_length`] counts Unicode scalar
//! values. Byte strings, lists and maps are measured by element count with
//! either rule. Nil and empty values pass.
//!
//! A zero bound means "no bound", and `length(0, 0)` requires the value to
//! be empty.

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_LENGTH_TOO_LONG: ValidationError = ValidationError::from_static(
    "validation_length_too_long",
    "the length must be no more than {{.max}}",
);
pub const ERR_LENGTH_TOO_SHORT: ValidationError = ValidationError::from_static(
    "validation_length_too_short",
    "the length must be no less than {{.min}}",
);
pub const ERR_LENGTH_INVALID: ValidationError = ValidationError::from_static(
    "validation_length_invalid",
    "the length must be exactly {{.min}}",
);
pub const ERR_LENGTH_OUT_OF_RANGE: ValidationError = ValidationError::from_static(
    "validation_length_out_of_range",
    "the length must be between {{.min}} and {{.max}}",
);
pub const ERR_LENGTH_EMPTY_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_length_empty_required",
    "the value must be empty",
);
pub const ERR_LENGTH_UNSUPPORTED: ValidationError = ValidationError::from_static(
    "validation_length_unsupported",
    "cannot get the length of {{.type}}",
);

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    fn measure(self, value: &Value) -> Option<usize> {
        match (self, value) {
            (Self::Chars, Value::Text(s)) => Some(s.chars().count()),
            _ => value.len(),
        }
    }
}

// ============================================================================
// LENGTH RULE
// ============================================================================

/// Checks that a value's length lies within `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthRule {
    min: usize,
    max: usize,
    mode: LengthMode,
    err: ValidationError,
}

/// Length in bytes for text, element count for collections.
pub fn length(min: usize, max: usize) -> LengthRule {
    LengthRule::new(min, max, LengthMode::Bytes)
}

/// Length in Unicode scalar values for text, element count for collections.
pub fn rune_length(min: usize, max: usize) -> LengthRule {
    LengthRule::new(min, max, LengthMode::Chars)
}

impl LengthRule {
    pub fn new(min: usize, max: usize, mode: LengthMode) -> Self {
        let template = match (min, max) {
            (0, 0) => ERR_LENGTH_EMPTY_REQUIRED,
            (0, _) => ERR_LENGTH_TOO_LONG,
            (_, 0) => ERR_LENGTH_TOO_SHORT,
            (lo, hi) if lo == hi => ERR_LENGTH_INVALID,
            _ => ERR_LENGTH_OUT_OF_RANGE,
        };
        Self {
            min,
            max,
            mode,
            err: template.with_params([("min", min), ("max", max)]),
        }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> usize {
        self.max
    }

    pub const fn mode(&self) -> LengthMode {
        self.mode
    }

    fn accepts(&self, len: usize) -> bool {
        let too_short = self.min > 0 && len < self.min;
        let too_long = self.max > 0 && len > self.max;
        let must_be_empty = self.min == 0 && self.max == 0 && len > 0;
        !(too_short || too_long || must_be_empty)
    }
}

impl Rule for LengthRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        let Some(len) = self.mode.measure(value) else {
            return Err(ERR_LENGTH_UNSUPPORTED.with_param("type", value.type_name()).into());
        };
        if self.accepts(len) { Ok(()) } else { Err(self.err.clone().into()) }
    }
}

impl_with_error!(LengthRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ToValue, WithError};
    use rstest::rstest;

    #[rstest]
    #[case(2, 4, "abc", true)]
    #[case(2, 4, "", true)]
    #[case(2, 4, "abcdf", false)]
    #[case(0, 4, "ab", true)]
    #[case(0, 4, "abcde", false)]
    #[case(2, 0, "ab", true)]
    #[case(2, 0, "a", false)]
    #[case(2, 2, "ab", true)]
    #[case(2, 2, "abc", false)]
    #[case(0, 0, "a", false)]
    #[case(2, 4, "中文", false)]
    #[case(2, 6, "中文", true)]
    fn test_length_bytes(#[case] min: usize, #[case] max: usize, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(length(min, max).validate(&input.to_value()).is_ok(), ok);
    }

    #[rstest]
    #[case(2, 4, "abc", true)]
    #[case(2, 4, "中文", true)]
    #[case(3, 4, "中文", false)]
    #[case(0, 1, "中", true)]
    fn test_rune_length(#[case] min: usize, #[case] max: usize, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(rune_length(min, max).validate(&input.to_value()).is_ok(), ok);
    }

    #[rstest]
    #[case(0, 10, "the length must be no more than 10")]
    #[case(10, 0, "the length must be no less than 10")]
    #[case(10, 10, "the length must be exactly 10")]
    #[case(5, 10, "the length must be between 5 and 10")]
    #[case(0, 0, "the value must be empty")]
    fn test_length_messages(#[case] min: usize, #[case] max: usize, #[case] message: &str) {
        assert_eq!(length(min, max).template().to_string(), message);
    }

    #[test]
    fn test_collections_and_nil() {
        assert!(length(1, 2).validate(&vec![1, 2, 3].to_value()).is_err());
        assert!(length(1, 2).validate(&Value::bytes(*b"ab")).is_ok());
        assert!(length(1, 2).validate(&Value::Nil).is_ok());
    }

    #[test]
    fn test_unsupported_type() {
        let err = length(1, 2).validate(&7i32.to_value()).unwrap_err();
        assert_eq!(err.to_string(), "cannot get the length of int");
        assert!(!err.is_internal());
    }

    #[test]
    fn test_error_override_keeps_params() {
        let rule = length(5, 10).error("{{.min}}..{{.max}}");
        assert_eq!(rule.validate(&"abc".to_value()).unwrap_err().to_string(), "5..10");
    }
}
