//! WHEN combinator - conditional rule lists

use crate::engine::apply_rules;
use crate::foundation::{DynRule, Error, Rule, ValidationContext, Value};

/// Runs one of two rule lists depending on a condition fixed at build time.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{nil, required, rules, validate, when};
///
/// let rule = when(order.is_shipped, rules![required()]).otherwise(rules![nil()]);
/// validate(&order.tracking_code, &rules![rule])?;
/// ```
#[derive(Clone)]
pub struct WhenRule {
    condition: bool,
    rules: Vec<DynRule>,
    otherwise: Vec<DynRule>,
}

/// Runs `rules` only if `condition` holds.
pub fn when(condition: bool, rules: Vec<DynRule>) -> WhenRule {
    WhenRule {
        condition,
        rules,
        otherwise: Vec::new(),
    }
}

impl WhenRule {
    /// Rules to run when the condition does not hold.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise(mut self, rules: Vec<DynRule>) -> Self {
        self.otherwise = rules;
        self
    }

    /// Decomposes into `(condition, rules, otherwise)`.
    pub fn into_parts(self) -> (bool, Vec<DynRule>, Vec<DynRule>) {
        (self.condition, self.rules, self.otherwise)
    }

    fn active(&self) -> &[DynRule] {
        if self.condition {
            &self.rules
        } else {
            &self.otherwise
        }
    }
}

impl std::fmt::Debug for WhenRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhenRule")
            .field("condition", &self.condition)
            .field("rules", &self.rules.len())
            .field("otherwise", &self.otherwise.len())
            .finish()
    }
}

impl Rule for WhenRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        self.validate_with_context(ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        apply_rules(ctx, value, self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{by, nil, required, rules, validate};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn tracking(flag: &Arc<AtomicBool>) -> DynRule {
        let flag = flag.clone();
        Arc::new(by(move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }))
    }

    #[test]
    fn test_only_active_branch_runs() {
        let (then_ran, else_ran) = (Arc::new(AtomicBool::new(false)), Arc::new(AtomicBool::new(false)));
        let rule = when(true, vec![tracking(&then_ran)]).otherwise(vec![tracking(&else_ran)]);
        assert!(validate(&1, &rules![rule]).is_ok());
        assert!(then_ran.load(Ordering::SeqCst));
        assert!(!else_ran.load(Ordering::SeqCst));

        let (then_ran, else_ran) = (Arc::new(AtomicBool::new(false)), Arc::new(AtomicBool::new(false)));
        let rule = when(false, vec![tracking(&then_ran)]).otherwise(vec![tracking(&else_ran)]);
        assert!(validate(&1, &rules![rule]).is_ok());
        assert!(!then_ran.load(Ordering::SeqCst));
        assert!(else_ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_when_else_errors() {
        let rule = || when(true, rules![required()]).otherwise(rules![nil()]);
        assert_eq!(validate(&"", &rules![rule()]).unwrap_err().to_string(), "cannot be blank");

        let rule = when(false, rules![required()]).otherwise(rules![nil()]);
        assert_eq!(validate(&"x", &rules![rule]).unwrap_err().to_string(), "must be blank");
    }

    #[test]
    fn test_false_without_otherwise_passes() {
        assert!(validate(&"", &rules![when(false, rules![required()])]).is_ok());
    }
}
