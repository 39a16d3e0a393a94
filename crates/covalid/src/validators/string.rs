//! Adapter turning a `&str` predicate into a rule

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Error, Rule, ValidationError, Value, ensure_string};
use crate::macros::impl_with_error;

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Checks text with a predicate. See [`string_rule`].
#[derive(Clone)]
pub struct StringRule {
    predicate: Predicate,
    err: ValidationError,
}

/// Builds a rule that fails with `message` when `predicate` rejects the text.
///
/// Nil and empty values pass; byte strings are decoded lossily; other
/// values fail with [`ERR_NOT_STRING`](crate::foundation::ERR_NOT_STRING).
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::prelude::*;
///
/// let no_spaces = string_rule(|s| !s.contains(' '), "must not contain spaces");
/// assert!(validate("a b", &rules![no_spaces]).is_err());
/// ```
pub fn string_rule<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    string_rule_with_error(predicate, ValidationError::new("", message))
}

/// Like [`string_rule`], with a complete error.
pub fn string_rule_with_error<F>(predicate: F, err: ValidationError) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    StringRule {
        predicate: Arc::new(predicate),
        err,
    }
}

impl Rule for StringRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        let text = ensure_string(value)?;
        if (self.predicate)(&text) { Ok(()) } else { Err(self.err.clone().into()) }
    }
}

impl fmt::Debug for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRule").field("err", &self.err).finish_non_exhaustive()
    }
}

impl_with_error!(StringRule);
