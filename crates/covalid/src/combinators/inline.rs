//! Rules built from closures

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Error, Rule, ValidationContext, Value};

type InlineFn = dyn Fn(&ValidationContext, &Value) -> Result<(), Error> + Send + Sync;

/// A rule backed by a closure.
#[derive(Clone)]
pub struct InlineRule {
    f: Arc<InlineFn>,
}

impl fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InlineRule")
    }
}

/// Wraps a closure as a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{by, rules, validate, ValidationError, Value};
///
/// let not_abc = by(|value| match value {
///     Value::Text(s) if s == "abc" => Err(ValidationError::custom("must not be abc").into()),
///     _ => Ok(()),
/// });
/// assert!(validate("abc", &rules![not_abc]).is_err());
/// ```
pub fn by<F>(f: F) -> InlineRule
where
    F: Fn(&Value) -> Result<(), Error> + Send + Sync + 'static,
{
    InlineRule {
        f: Arc::new(move |_: &ValidationContext, value: &Value| f(value)),
    }
}

/// Wraps a context-aware closure as a rule.
///
/// The context-free entry points pass an empty context.
pub fn with_context<F>(f: F) -> InlineRule
where
    F: Fn(&ValidationContext, &Value) -> Result<(), Error> + Send + Sync + 'static,
{
    InlineRule { f: Arc::new(f) }
}

impl Rule for InlineRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        (self.f)(ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        (self.f)(ctx, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use crate::{rules, validate, validate_with_context};

    #[test]
    fn test_by() {
        let rule = by(|value| match value {
            Value::Text(s) if s == "abc" => Err(ValidationError::custom("must not be abc").into()),
            _ => Ok(()),
        });
        let rules = rules![rule];
        assert_eq!(validate(&"abc", &rules).unwrap_err().to_string(), "must not be abc");
        assert!(validate(&"xyz", &rules).is_ok());
    }

    #[test]
    fn test_with_context_reads_values() {
        let rule = with_context(|ctx, value| {
            if ctx.contains("containsKey") && value.as_str() == Some("abc") {
                Err(ValidationError::custom("unexpected value").into())
            } else {
                Ok(())
            }
        });
        let rules = rules![rule];
        let ctx = ValidationContext::new().with("containsKey", true);
        assert!(validate_with_context(&ctx, &"abc", &rules).is_err());
        assert!(validate(&"abc", &rules).is_ok());
    }
}
