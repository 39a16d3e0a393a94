//! SKIP sentinel

use crate::foundation::{Error, Rule, Value};

/// Stops evaluation of the rule list it appears in.
///
/// The engine treats a skipping rule as the end of its list: later rules do
/// not run, and neither does the value's own validation. Use
/// [`when`](SkipRule::when) to skip conditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRule {
    skip: bool,
}

/// Returns a rule that skips the rest of its list.
pub const fn skip() -> SkipRule {
    SkipRule { skip: true }
}

impl SkipRule {
    /// Skips only if `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn when(mut self, condition: bool) -> Self {
        self.skip = condition;
        self
    }
}

impl Rule for SkipRule {
    fn validate(&self, _value: &Value) -> Result<(), Error> {
        Ok(())
    }

    fn skips(&self) -> bool {
        self.skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{required, rules, validate};

    #[test]
    fn test_skip_when() {
        assert!(skip().skips());
        assert!(!skip().when(false).skips());
        assert!(skip().when(true).skips());
    }

    #[test]
    fn test_conditional_skip() {
        assert!(validate(&"", &rules![skip().when(true), required()]).is_ok());
        assert!(validate(&"", &rules![skip().when(false), required()]).is_err());
    }
}
