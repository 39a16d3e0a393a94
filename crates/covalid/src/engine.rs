//! Validation entry points
//!
//! Validating a value against a rule list is done in three steps:
//!
//! 1. If the list contains a skipping rule ([`skip`](crate::skip)), the
//!    value's own validation is bypassed and only the rules before it run.
//! 2. Otherwise the value validates itself first: a struct with an attached
//!    [`Validatable`](crate::foundation::Validatable), or every such struct
//!    inside a list or map. A failure is returned as-is.
//! 3. The rules run in declaration order; the first failure is returned.
//!
//! Single values have no field attribution: the failing rule's error comes
//! back unchanged. Struct, map and collection traversal build keyed
//! [`ValidationErrors`](crate::foundation::ValidationErrors) on top of this.

use crate::combinators::nested;
use crate::foundation::{DynRule, Error, ToValue, ValidationContext, Value};

/// Validates `value` against `rules`.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{rules, validate, length, required};
///
/// let result = validate("", &rules![required(), length(5, 10)]);
/// assert_eq!(result.unwrap_err().to_string(), "cannot be blank");
/// ```
pub fn validate<T: ToValue + ?Sized>(value: &T, rules: &[DynRule]) -> Result<(), Error> {
    validate_value(ValidationContext::background(), &value.to_value(), rules)
}

/// Validates `value` against `rules`, passing `ctx` to context-aware rules.
pub fn validate_with_context<T: ToValue + ?Sized>(
    ctx: &ValidationContext,
    value: &T,
    rules: &[DynRule],
) -> Result<(), Error> {
    validate_value(ctx, &value.to_value(), rules)
}

/// Validates an already converted value.
pub fn validate_value(ctx: &ValidationContext, value: &Value, rules: &[DynRule]) -> Result<(), Error> {
    let skip_at = rules.iter().position(|rule| rule.skips());
    if skip_at.is_none() {
        nested::validate_nested(ctx, value)?;
    }
    let active = skip_at.map_or(rules, |at| &rules[..at]);
    apply_rules(ctx, value, active)
}

/// Runs `rules` in order without the value's own validation.
///
/// Stops silently at the first skipping rule and returns the first failure.
pub fn apply_rules(ctx: &ValidationContext, value: &Value, rules: &[DynRule]) -> Result<(), Error> {
    for rule in rules {
        if rule.skips() {
            return Ok(());
        }
        rule.validate_with_context(ctx, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, StructValue, Validatable, ValidationError};
    use crate::{by, rules, skip};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Rule for Counting {
        fn validate(&self, _: &Value) -> Result<(), Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ValidationError::new("counting", "failed").into())
            } else {
                Ok(())
            }
        }
    }

    struct AlwaysInvalid;

    impl Validatable for AlwaysInvalid {
        fn validate(&self) -> Result<(), Error> {
            Err(ValidationError::new("self", "self invalid").into())
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = rules![
            Counting { calls: calls.clone(), fail: false },
            Counting { calls: calls.clone(), fail: true },
            Counting { calls: calls.clone(), fail: true },
        ];
        let err = validate(&1, &rules).unwrap_err();
        assert_eq!(err.code(), Some("counting"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_skip_stops_later_rules() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = rules![
            Counting { calls: calls.clone(), fail: false },
            skip(),
            Counting { calls: calls.clone(), fail: true },
        ];
        assert!(validate(&1, &rules).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_self_validation_runs_before_rules() {
        let calls = Arc::new(AtomicUsize::new(0));
        let value = Value::from(StructValue::new("S").validated_by(AlwaysInvalid));
        let rules = rules![Counting { calls: calls.clone(), fail: true }];

        let err = validate(&value, &rules).unwrap_err();
        assert_eq!(err.to_string(), "self invalid");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_skip_bypasses_self_validation() {
        let value = Value::from(StructValue::new("S").validated_by(AlwaysInvalid));
        assert!(validate(&value, &rules![skip()]).is_ok());
        assert!(validate(&value, &rules![skip().when(false)]).is_err());
    }

    #[test]
    fn test_context_reaches_rules() {
        let ctx = ValidationContext::new().with("limit", 3i64);
        let rule = crate::with_context(|ctx, value| match (ctx.get::<i64>("limit"), value) {
            (Some(limit), Value::Int(v)) if v > limit => {
                Err(ValidationError::new("limit", "over the limit").into())
            }
            _ => Ok(()),
        });
        let rules = rules![rule];
        assert!(validate_with_context(&ctx, &2, &rules).is_ok());
        assert!(validate_with_context(&ctx, &4, &rules).is_err());
        assert!(validate(&4, &rules).is_ok());
    }

    #[test]
    fn test_no_rules_is_valid() {
        assert!(validate(&"anything", &[]).is_ok());
        assert!(validate(&None::<String>, &rules![by(|_| Ok(()))]).is_ok());
    }
}
