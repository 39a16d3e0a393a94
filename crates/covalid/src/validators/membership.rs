//! Membership rules: [`is_in`] and [`not_in`].
//!
//! Elements are compared with [`Value`] equality, so `1i32` and `1u64`
//! are the same element. Nil and empty values pass.

use crate::foundation::{Error, Rule, ToValue, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_IN_INVALID: ValidationError =
    ValidationError::from_static("validation_in_invalid", "must be a valid value");
pub const ERR_NOT_IN_INVALID: ValidationError =
    ValidationError::from_static("validation_not_in_invalid", "must not be in list");

/// Checks a value against a fixed list of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct InRule {
    elements: Vec<Value>,
    negated: bool,
    err: ValidationError,
}

/// Fails unless the value equals one of `elements`.
pub fn is_in<T: ToValue>(elements: impl IntoIterator<Item = T>) -> InRule {
    InRule::new(elements, false, ERR_IN_INVALID)
}

/// Fails if the value equals one of `elements`.
pub fn not_in<T: ToValue>(elements: impl IntoIterator<Item = T>) -> InRule {
    InRule::new(elements, true, ERR_NOT_IN_INVALID)
}

impl InRule {
    fn new<T: ToValue>(
        elements: impl IntoIterator<Item = T>,
        negated: bool,
        err: ValidationError,
    ) -> Self {
        Self {
            elements: elements.into_iter().map(|e| e.to_value()).collect(),
            negated,
            err,
        }
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }
}

impl Rule for InRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        let found = self.elements.contains(value);
        if found == self.negated { Err(self.err.clone().into()) } else { Ok(()) }
    }
}

impl_with_error!(InRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::WithError;
    use rstest::rstest;

    #[rstest]
    #[case(1i32.to_value(), true)]
    #[case(2u8.to_value(), true)]
    #[case(4i64.to_value(), false)]
    #[case(0i32.to_value(), true)]
    #[case(Value::Nil, true)]
    #[case("1".to_value(), false)]
    fn test_in(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(is_in([1, 2, 3]).validate(&value).is_ok(), ok);
    }

    #[rstest]
    #[case("a", false)]
    #[case("d", true)]
    #[case("", true)]
    fn test_not_in(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(not_in(["a", "b"]).validate(&value.to_value()).is_ok(), ok);
    }

    #[test]
    fn test_messages() {
        let err = is_in(["x"]).validate(&"y".to_value()).unwrap_err();
        assert_eq!(err.to_string(), "must be a valid value");
        let err = not_in(["x"]).validate(&"x".to_value()).unwrap_err();
        assert_eq!(err.code(), Some("validation_not_in_invalid"));
        let err = not_in(["x"]).error("reserved").validate(&"x".to_value()).unwrap_err();
        assert_eq!(err.to_string(), "reserved");
    }
}
