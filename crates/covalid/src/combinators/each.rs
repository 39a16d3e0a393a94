//! EACH combinator - validates each element of a collection

use crate::engine::validate_value;
use crate::foundation::{
    DynRule, Error, Kind, Rule, StructuralError, ValidationContext, ValidationErrors, Value,
};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates every element of a list, or every value of a map.
///
/// Failures are keyed by element index or by map key. A nil collection is
/// valid; any other non-collection value is an internal error.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{each, required, rules, validate};
///
/// let err = validate(&["", "v", ""], &rules![each(rules![required()])]).unwrap_err();
/// assert_eq!(err.to_string(), "0: cannot be blank; 2: cannot be blank.");
/// ```
#[derive(Clone)]
pub struct EachRule {
    rules: Vec<DynRule>,
    fail_fast: bool,
}

/// Applies `rules` to every element.
pub fn each(rules: Vec<DynRule>) -> EachRule {
    EachRule {
        rules,
        fail_fast: false,
    }
}

impl EachRule {
    /// Stops at the first element that fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    fn validate_elements<'a>(
        &self,
        ctx: &ValidationContext,
        elements: impl Iterator<Item = (String, &'a Value)>,
    ) -> Result<(), Error> {
        let mut errors = ValidationErrors::new();
        for (key, element) in elements {
            match validate_value(ctx, element, &self.rules) {
                Ok(()) => {}
                Err(err) if err.is_internal() => return Err(err),
                Err(err) => {
                    errors.insert(key, err);
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }
        errors.into_result()
    }
}

impl std::fmt::Debug for EachRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EachRule")
            .field("rules", &self.rules.len())
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}

impl Rule for EachRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        self.validate_with_context(ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        match value.kind() {
            Kind::Nil => Ok(()),
            Kind::Collection => self.validate_elements(ctx, value.entries()),
            _ => Err(StructuralError::NotIterable.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use crate::{by, length, required, rules, validate};
    use std::collections::BTreeMap;

    #[test]
    fn test_each_list() {
        let err = validate(&["", "v", ""], &rules![each(rules![required()])]).unwrap_err();
        assert_eq!(err.to_string(), "0: cannot be blank; 2: cannot be blank.");
    }

    #[test]
    fn test_each_map_values() {
        let value: BTreeMap<&str, &str> = [("a", "abc"), ("b", "x")].into_iter().collect();
        let err = validate(&value, &rules![each(rules![length(2, 4)])]).unwrap_err();
        assert_eq!(err.to_string(), "b: the length must be between 2 and 4.");
    }

    #[test]
    fn test_fail_fast() {
        let err = validate(&["", "", ""], &rules![each(rules![required()]).fail_fast()]).unwrap_err();
        assert_eq!(err.to_string(), "0: cannot be blank.");
    }

    #[test]
    fn test_non_iterable_is_internal() {
        let err = validate(&"abc", &rules![each(rules![required()])]).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "must be an iterable (map, slice or array)");
        assert!(validate(&None::<Vec<i32>>, &rules![each(rules![required()])]).is_ok());
    }

    #[test]
    fn test_internal_error_in_element_aborts() {
        let rule = by(|v| match v {
            Value::Int(2) => Err(Error::internal(ValidationError::new("x", "broken"))),
            Value::Int(_) => Err(ValidationError::new("odd", "odd").into()),
            _ => Ok(()),
        });
        let err = validate(&[1, 2, 3], &rules![each(rules![rule])]).unwrap_err();
        assert_eq!(err.to_string(), "broken");
    }
}
