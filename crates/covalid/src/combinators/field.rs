//! Struct validation
//!
//! [`validate_struct`] applies rule lists to selected fields of a struct.
//! Fields are addressed by name; embedded fields are promoted, so a field of
//! an embedded struct can be addressed directly. A dotted path
//! (`"Address.City"`) reaches into a nested struct.
//!
//! Name resolution goes through an ordered lookup list built once per call:
//! the struct's own fields first, then the fields of its embedded structs,
//! breadth first. The first match wins.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::engine::validate_value;
use crate::foundation::{
    DynRule, Error, FieldValue, StructValue, StructuralError, ToValue, ValidationContext,
    ValidationErrors, Value,
};

// ============================================================================
// FIELD RULES
// ============================================================================

/// Binds a struct field to an ordered rule list.
#[derive(Clone)]
pub struct FieldRules {
    path: Cow<'static, str>,
    rules: Vec<DynRule>,
}

impl FieldRules {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn rules(&self) -> &[DynRule] {
        &self.rules
    }
}

impl std::fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRules")
            .field("path", &self.path)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Binds the field at `path` to `rules`.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{field, length, required, rules, validate_struct};
///
/// validate_struct(&customer, [
///     field("Name", rules![required(), length(5, 20)]),
///     field("Address.City", rules![required()]),
/// ])?;
/// ```
pub fn field(path: impl Into<Cow<'static, str>>, rules: Vec<DynRule>) -> FieldRules {
    FieldRules {
        path: path.into(),
        rules,
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates the selected fields of a struct.
///
/// A nil struct is valid. Anything other than a struct is an internal
/// error, and so is a binding that names a field the struct does not have.
/// Failures are keyed by each field's error key (its tag name, or its
/// name). Failures inside an embedded struct are merged into the result
/// instead of being nested under the embedded field.
pub fn validate_struct<T: ToValue + ?Sized>(
    value: &T,
    fields: impl IntoIterator<Item = FieldRules>,
) -> Result<(), Error> {
    validate_struct_with_context(ValidationContext::background(), value, fields)
}

/// Context-aware form of [`validate_struct`].
pub fn validate_struct_with_context<T: ToValue + ?Sized>(
    ctx: &ValidationContext,
    value: &T,
    fields: impl IntoIterator<Item = FieldRules>,
) -> Result<(), Error> {
    let fields: Vec<FieldRules> = fields.into_iter().collect();
    validate_struct_value(ctx, &value.to_value(), &fields)
}

/// Validates the selected fields of an already converted struct.
pub fn validate_struct_value(
    ctx: &ValidationContext,
    value: &Value,
    fields: &[FieldRules],
) -> Result<(), Error> {
    let value = match value {
        Value::Nil => return Ok(()),
        Value::Struct(s) => s,
        _ => return Err(StructuralError::NotStruct.into()),
    };
    tracing::trace!(struct_name = value.name(), fields = fields.len(), "validating struct");

    let index = FieldIndex::new(value);
    let mut errors = ValidationErrors::new();
    for (i, rules) in fields.iter().enumerate() {
        let Some((field, key)) = index.resolve(&rules.path) else {
            return Err(StructuralError::FieldNotFound(i).into());
        };

        match validate_value(ctx, field.value(), &rules.rules) {
            Ok(()) => {}
            Err(err) if err.is_internal() => {
                tracing::debug!(
                    struct_name = value.name(),
                    field = %rules.path,
                    error = %err,
                    "internal error aborted struct validation"
                );
                return Err(err);
            }
            Err(Error::Fields(nested)) if field.is_embedded() => errors.merge(nested),
            Err(err) => errors.insert(key, err),
        }
    }
    errors.into_result()
}

// ============================================================================
// FIELD INDEX
// ============================================================================

/// Fields of a struct in lookup order: own fields, then promoted ones.
struct FieldIndex<'a> {
    entries: Vec<&'a FieldValue>,
}

impl<'a> FieldIndex<'a> {
    fn new(root: &'a StructValue) -> Self {
        let mut entries = Vec::with_capacity(root.fields().len());
        let mut pending = VecDeque::from([root]);
        while let Some(current) = pending.pop_front() {
            entries.extend(current.fields());
            for field in current.fields().iter().filter(|f| f.is_embedded()) {
                if let Value::Struct(inner) = field.value() {
                    pending.push_back(inner);
                }
            }
        }
        Self { entries }
    }

    fn lookup(&self, name: &str) -> Option<&'a FieldValue> {
        self.entries.iter().copied().find(|f| f.name() == name)
    }

    /// Resolves a dotted path to the field and the key its errors go under.
    fn resolve(&self, path: &str) -> Option<(&'a FieldValue, String)> {
        let mut segments = path.split('.');
        let mut field = self.lookup(segments.next()?)?;
        let mut key = field.error_key().to_owned();
        for segment in segments {
            let Value::Struct(inner) = field.value() else {
                return None;
            };
            field = FieldIndex::new(inner).lookup(segment)?;
            key.push('.');
            key.push_str(field.error_key());
        }
        Some((field, key))
    }
}
