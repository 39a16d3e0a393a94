//! Self-validation of nested values
//!
//! A struct whose value model carries a [`Validatable`] validates itself
//! whenever the engine reaches it. Lists and maps are searched one level
//! deep: each self-validating struct element runs its own validation and
//! failures are keyed by index or map key.
//!
//! [`Validatable`]: crate::foundation::Validatable

use crate::foundation::{Error, Kind, ValidationContext, ValidationErrors, Value};

/// Runs the self-validation of `value` and of its direct elements.
pub(crate) fn validate_nested(ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
    match value {
        Value::Struct(s) => match s.validator() {
            Some(validator) => validator.validate_with_context(ctx),
            None => Ok(()),
        },
        _ if value.kind() == Kind::Collection => validate_elements(ctx, value.entries()),
        _ => Ok(()),
    }
}

fn validate_elements<'a>(
    ctx: &ValidationContext,
    elements: impl Iterator<Item = (String, &'a Value)>,
) -> Result<(), Error> {
    let mut errors = ValidationErrors::new();
    for (key, element) in elements {
        let Value::Struct(s) = element else {
            continue;
        };
        let Some(validator) = s.validator() else {
            continue;
        };
        match validator.validate_with_context(ctx) {
            Ok(()) => {}
            Err(err) if err.is_internal() => return Err(err),
            Err(err) => errors.insert(key, err),
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{MapValue, StructValue, Validatable, ValidationError};

    struct Named(&'static str);

    impl Validatable for Named {
        fn validate(&self) -> Result<(), Error> {
            if self.0.is_empty() {
                Err(ValidationError::new("name", "name is blank").into())
            } else {
                Ok(())
            }
        }
    }

    fn item(name: &'static str) -> Value {
        StructValue::new("Item").field("Name", name).validated_by(Named(name)).into()
    }

    #[test]
    fn test_list_elements_keyed_by_index() {
        let list = Value::List(vec![item("a"), item(""), Value::Nil, item("")]);
        let err = validate_nested(ValidationContext::background(), &list).unwrap_err();
        assert_eq!(err.to_string(), "1: name is blank; 3: name is blank.");
    }

    #[test]
    fn test_map_elements_keyed_by_key() {
        let map: MapValue = [("x", item("")), ("y", item("ok"))].into_iter().collect();
        let err = validate_nested(ValidationContext::background(), &Value::Map(map)).unwrap_err();
        assert_eq!(err.to_string(), "x: name is blank.");
    }

    #[test]
    fn test_plain_values_have_nothing_to_validate() {
        let ctx = ValidationContext::background();
        assert!(validate_nested(ctx, &Value::Int(1)).is_ok());
        assert!(validate_nested(ctx, &Value::List(vec![Value::Nil])).is_ok());
        assert!(validate_nested(ctx, &Value::from(StructValue::new("S"))).is_ok());
    }
}
