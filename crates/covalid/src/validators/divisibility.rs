//! Divisibility rule

use crate::foundation::{Error, Rule, StructuralError, ToValue, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_MULTIPLE_OF_INVALID: ValidationError =
    ValidationError::from_static("validation_multiple_of_invalid", "must be multiple of {{.base}}");

/// Raised when a [`MultipleOfRule`] is built with a zero base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("multiple of zero is undefined")]
pub struct ZeroBase;

/// Checks that an integer is a multiple of a base. See [`multiple_of`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleOfRule {
    base: Value,
    err: ValidationError,
}

/// Fails unless the value is a multiple of `base`.
///
/// `base` must be a signed or unsigned integer; the value is converted to
/// the same representation. Any other base type makes validation fail
/// with an internal error.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::prelude::*;
///
/// assert!(validate(&20, &rules![multiple_of(10)]).is_ok());
/// assert_eq!(validate(&11, &rules![multiple_of(10)]).unwrap_err().to_string(), "must be multiple of 10");
/// ```
pub fn multiple_of(base: impl ToValue) -> MultipleOfRule {
    let base = base.to_value();
    MultipleOfRule {
        err: ERR_MULTIPLE_OF_INVALID.with_param("base", base.to_json()),
        base,
    }
}

impl MultipleOfRule {
    pub fn base(&self) -> &Value {
        &self.base
    }

    fn divides(&self, value: &Value) -> Result<bool, Error> {
        match self.base {
            Value::Int(0) | Value::Uint(0) => Err(Error::internal(ZeroBase)),
            Value::Int(base) => Ok(value.to_i64()?.wrapping_rem(base) == 0),
            Value::Uint(base) => Ok(value.to_u64()? % base == 0),
            ref other => Err(StructuralError::UnsupportedType(other.type_name()).into()),
        }
    }
}

impl Rule for MultipleOfRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        let Some(value) = value.indirect() else {
            return Ok(());
        };
        if self.divides(value)? { Ok(()) } else { Err(self.err.clone().into()) }
    }
}

impl_with_error!(MultipleOfRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::WithError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signed_base() {
        let rule = multiple_of(10);
        assert_eq!(rule.validate(&11i32.to_value()).unwrap_err().to_string(), "must be multiple of 10");
        assert!(rule.validate(&20i32.to_value()).is_ok());
        assert!(rule.validate(&(-30i64).to_value()).is_ok());
        assert!(rule.validate(&Value::Nil).is_ok());

        let err = rule.validate(&20.0f32.to_value()).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert float to int");
        assert!(!err.is_internal());
    }

    #[test]
    fn test_unsigned_base() {
        let rule = multiple_of(10u32);
        assert!(rule.validate(&20u64.to_value()).is_ok());
        assert!(rule.validate(&11u8.to_value()).is_err());
        assert!(rule.validate(&(-10i32).to_value()).is_err());
    }

    #[test]
    fn test_min_value_does_not_overflow() {
        assert!(multiple_of(-1i64).validate(&i64::MIN.to_value()).is_ok());
    }

    #[test]
    fn test_unsupported_base_is_internal() {
        let err = multiple_of("some string").validate(&10i32.to_value()).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "type not supported: string");

        let err = multiple_of(0).validate(&10i32.to_value()).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_error_override() {
        let rule = multiple_of(10).error("some error string ...");
        assert_eq!(rule.template().message(), "some error string ...");

        let custom = ValidationError::new("code", "abc");
        let rule = multiple_of(10).error_object(custom.clone());
        assert_eq!(rule.template(), &custom);
    }
}
