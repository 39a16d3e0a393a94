//! Map validation
//!
//! [`map`] builds a rule that validates selected keys of a map value.
//! Declared keys are validated with their own rule lists; keys that were not
//! declared are reported as unexpected unless
//! [`allow_extra_keys`](MapRule::allow_extra_keys) is set. Missing keys and
//! unexpected keys are both reported, in the same aggregate.

use std::collections::BTreeSet;

use crate::engine::validate_value;
use crate::foundation::{
    DynRule, Error, MapKey, Rule, StructuralError, ValidationContext, ValidationError,
    ValidationErrors, Value,
};

pub const ERR_KEY_WRONG_TYPE: ValidationError =
    ValidationError::from_static("validation_key_wrong_type", "key not the correct type");
pub const ERR_KEY_MISSING: ValidationError =
    ValidationError::from_static("validation_key_missing", "required key is missing");
pub const ERR_KEY_UNEXPECTED: ValidationError =
    ValidationError::from_static("validation_key_unexpected", "key not expected");

// ============================================================================
// KEY RULES
// ============================================================================

/// Binds a map key to an ordered rule list.
#[derive(Clone)]
pub struct KeyRules {
    key: MapKey,
    rules: Vec<DynRule>,
    optional: bool,
}

impl KeyRules {
    /// A missing optional key is valid.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn key(&self) -> &MapKey {
        &self.key
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl std::fmt::Debug for KeyRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRules")
            .field("key", &self.key)
            .field("rules", &self.rules.len())
            .field("optional", &self.optional)
            .finish()
    }
}

/// Binds `key` to `rules`.
pub fn key(key: impl Into<MapKey>, rules: Vec<DynRule>) -> KeyRules {
    KeyRules {
        key: key.into(),
        rules,
        optional: false,
    }
}

// ============================================================================
// MAP RULE
// ============================================================================

/// Validates the declared keys of a map.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{key, length, map, required, rules, validate};
///
/// let rule = map([
///     key("Name", rules![required()]),
///     key("Value", rules![required(), length(5, 10)]),
/// ]);
/// validate(&payload, &rules![rule])?;
/// ```
#[derive(Debug, Clone)]
pub struct MapRule {
    keys: Vec<KeyRules>,
    allow_extra_keys: bool,
}

/// Builds a map rule from key bindings.
pub fn map(keys: impl IntoIterator<Item = KeyRules>) -> MapRule {
    MapRule {
        keys: keys.into_iter().collect(),
        allow_extra_keys: false,
    }
}

impl MapRule {
    /// Accepts keys that have no binding.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_extra_keys(mut self) -> Self {
        self.allow_extra_keys = true;
        self
    }
}

impl Rule for MapRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        self.validate_with_context(ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        let map = match value {
            Value::Nil => return Ok(()),
            Value::Map(map) => map,
            _ => return Err(StructuralError::NotMap.into()),
        };
        tracing::trace!(keys = self.keys.len(), entries = map.len(), "validating map");

        let mut extra: BTreeSet<&MapKey> = if self.allow_extra_keys {
            BTreeSet::new()
        } else {
            map.keys().collect()
        };
        let mut errors = ValidationErrors::new();

        for rules in &self.keys {
            let Some(key) = rules.key.coerce(map.key_kind()) else {
                errors.insert(rules.key.to_string(), ERR_KEY_WRONG_TYPE);
                continue;
            };
            extra.remove(&key);

            let result = match map.get(&key) {
                Some(entry) => validate_value(ctx, entry, &rules.rules),
                None if rules.optional => Ok(()),
                None => Err(ERR_KEY_MISSING.into()),
            };
            match result {
                Ok(()) => {}
                Err(err) if err.is_internal() => {
                    tracing::debug!(key = %key, error = %err, "internal error aborted map validation");
                    return Err(err);
                }
                Err(err) => errors.insert(key.to_string(), err),
            }
        }

        for key in extra {
            errors.insert(key.to_string(), ERR_KEY_UNEXPECTED);
        }
        errors.into_result()
    }
}
