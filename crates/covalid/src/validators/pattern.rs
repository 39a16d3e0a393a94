//! Regular expression rule

use regex::Regex;

use crate::foundation::{Error, Rule, TextRef, ValidationError, Value, string_or_bytes};
use crate::macros::impl_with_error;

pub const ERR_MATCH_INVALID: ValidationError =
    ValidationError::from_static("validation_match_invalid", "must be in a valid format");

/// Checks text against a regular expression. See [`matches`].
#[derive(Debug, Clone)]
pub struct MatchRule {
    re: Regex,
    err: ValidationError,
}

/// Fails unless the text or bytes match `re`.
///
/// Nil and empty values pass. Any other non-text value fails with the
/// rule's error.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::prelude::*;
/// use regex::Regex;
///
/// let sku = matches(Regex::new(r"^[A-Z]{3}-\d{4}$")?);
/// assert!(validate("ABC-1234", &rules![sku]).is_ok());
/// ```
pub fn matches(re: Regex) -> MatchRule {
    MatchRule {
        re,
        err: ERR_MATCH_INVALID,
    }
}

impl MatchRule {
    /// Compiles `pattern` and builds the rule.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(matches)
    }

    pub fn regex(&self) -> &Regex {
        &self.re
    }
}

impl Rule for MatchRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        let Some(value) = value.indirect() else {
            return Ok(());
        };
        let ok = match string_or_bytes(value) {
            Some(TextRef::Str(s)) => s.is_empty() || self.re.is_match(s),
            Some(TextRef::Bytes(b)) => b.is_empty() || self.re.is_match(&String::from_utf8_lossy(b)),
            None => false,
        };
        if ok { Ok(()) } else { Err(self.err.clone().into()) }
    }
}

impl_with_error!(MatchRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ToValue, WithError};
    use rstest::rstest;

    fn digits() -> MatchRule {
        MatchRule::new(r"^[0-9]+$").unwrap()
    }

    #[rstest]
    #[case("123".to_value(), true)]
    #[case("12a".to_value(), false)]
    #[case("".to_value(), true)]
    #[case(Value::Nil, true)]
    #[case(Value::bytes(*b"42"), true)]
    #[case(Value::bytes(*b"4x"), false)]
    #[case(12i32.to_value(), false)]
    fn test_matches(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(digits().validate(&value).is_ok(), ok);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(MatchRule::new("(").is_err());
    }

    #[test]
    fn test_error_override() {
        let err = digits().error("digits only").validate(&"x".to_value()).unwrap_err();
        assert_eq!(err.to_string(), "digits only");
        assert_eq!(err.code(), Some("validation_match_invalid"));
    }
}
