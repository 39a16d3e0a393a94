//! Absence rules: the counterparts of [`required`](super::required).

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_NIL: ValidationError = ValidationError::from_static("validation_nil", "must be blank");
pub const ERR_EMPTY: ValidationError =
    ValidationError::from_static("validation_empty", "must be blank");

/// Rejects present values. See [`nil`] and [`empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct AbsentRule {
    condition: bool,
    skip_nil: bool,
    err: ValidationError,
}

/// Fails for every value that is not nil, including empty ones.
pub const fn nil() -> AbsentRule {
    AbsentRule {
        condition: true,
        skip_nil: false,
        err: ERR_NIL,
    }
}

/// Fails for values that are neither nil nor empty.
pub const fn empty() -> AbsentRule {
    AbsentRule {
        condition: true,
        skip_nil: true,
        err: ERR_EMPTY,
    }
}

impl AbsentRule {
    /// Applies the rule only if `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }
}

impl Rule for AbsentRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if !self.condition {
            return Ok(());
        }
        let present = match value.indirect() {
            None => false,
            Some(v) => !self.skip_nil || !v.is_empty(),
        };
        if present { Err(self.err.clone().into()) } else { Ok(()) }
    }
}

impl_with_error!(AbsentRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ToValue, WithError};

    #[test]
    fn test_nil() {
        assert!(nil().validate(&Value::Nil).is_ok());
        assert!(nil().validate(&None::<i32>.to_value()).is_ok());
        assert_eq!(nil().validate(&"".to_value()).unwrap_err().to_string(), "must be blank");
        assert!(nil().validate(&0i32.to_value()).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(empty().validate(&Value::Nil).is_ok());
        assert!(empty().validate(&"".to_value()).is_ok());
        assert!(empty().validate(&Vec::<u8>::new().to_value()).is_ok());
        assert_eq!(
            empty().validate(&"abc".to_value()).unwrap_err().code(),
            Some("validation_empty")
        );
    }

    #[test]
    fn test_when_and_error() {
        assert!(nil().when(false).validate(&"abc".to_value()).is_ok());
        let err = empty().error("must be left out").validate(&1i32.to_value()).unwrap_err();
        assert_eq!(err.to_string(), "must be left out");
    }
}
