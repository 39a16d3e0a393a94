//! Error types for validation failures
//!
//! Validation can end in three different ways, each with its own type:
//!
//! - [`ValidationError`]: a single failed rule. Carries a stable code, a
//!   message template and template parameters.
//! - [`ValidationErrors`]: failures attributed to struct fields, map keys or
//!   collection indices. Always iterated and rendered in key order.
//! - [`InternalError`]: a failure unrelated to the validity of the input
//!   (misuse, an unsupported type, a broken custom rule). It aborts
//!   aggregation and reaches the caller untouched.
//!
//! Every entry point returns the umbrella [`Error`].
//!
//! All string fields use `Cow<'static, str>` so that the pre-declared error
//! templates (`ERR_REQUIRED` and friends) never allocate.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

/// Value stored in an error parameter.
pub type ParamValue = serde_json::Value;

type Params = SmallVec<[(Cow<'static, str>, ParamValue); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// The message is a template: `{{.name}}` placeholders are replaced with the
/// matching parameter when the error is displayed. Configuration methods
/// consume the error and return the updated copy, so a shared template is
/// never changed behind the back of its other users.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::ValidationError;
///
/// let error = ValidationError::new("validation_multiple_of_invalid", "must be multiple of {{.base}}")
///     .with_param("base", 10);
/// assert_eq!(error.to_string(), "must be multiple of 10");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates an error from static strings, usable in `const` items.
    #[must_use]
    pub const fn from_static(code: &'static str, message: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            params: SmallVec::new_const(),
        }
    }

    /// Creates an error for ad-hoc checks written inline with [`by`](crate::by).
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Machine-readable identifier.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The raw message template, before parameter substitution.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Template parameters, in insertion order.
    pub fn params(&self) -> &[(Cow<'static, str>, ParamValue)] {
        &self.params
    }

    /// Looks up a single parameter.
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// Replaces the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Replaces the message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces every parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<ParamValue>,
    {
        self.params.clear();
        for (key, value) in params {
            self.set_param(key.into(), value.into());
        }
        self
    }

    /// Adds a parameter, overwriting an existing one with the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.set_param(key.into(), value.into());
        self
    }

    fn set_param(&mut self, key: Cow<'static, str>, value: ParamValue) {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Renders the message template with the current parameters.
    pub fn render(&self) -> Cow<'_, str> {
        render_template(&self.message, &self.params)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ValidationError {}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .all(|(k, v)| other.param(k).is_some_and(|o| o == v))
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

fn render_template<'a>(template: &'a str, params: &[(Cow<'static, str>, ParamValue)]) -> Cow<'a, str> {
    if !template.contains("{{") {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let Some(end) = tail.find("}}") else {
            out.push_str(&rest[start..]);
            return Cow::Owned(out);
        };

        match tail[..end].trim().strip_prefix('.') {
            Some(name) => {
                match params.iter().find(|(k, _)| k.as_ref() == name) {
                    Some((_, ParamValue::String(s))) => out.push_str(s),
                    Some((_, value)) => out.push_str(&value.to_string()),
                    None => out.push_str("<no value>"),
                }
            }
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// ============================================================================
// STRUCTURAL ERRORS
// ============================================================================

/// Misuse of the validation API, detected while traversing a value.
///
/// These are always reported wrapped in an [`InternalError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StructuralError {
    /// Struct rules were applied to something that is not a struct.
    #[error("only a struct can be validated")]
    NotStruct,

    /// A field binding names a field the struct does not have.
    #[error("field #{0} cannot be found in the struct")]
    FieldNotFound(usize),

    /// Map rules were applied to something that is not a map.
    #[error("only a map can be validated")]
    NotMap,

    /// `each` was applied to something that cannot be iterated.
    #[error("must be an iterable (map, slice or array)")]
    NotIterable,

    /// A rule was configured with a value it cannot work with.
    #[error("type not supported: {0}")]
    UnsupportedType(&'static str),
}

// ============================================================================
// INTERNAL ERROR
// ============================================================================

/// A non-validation failure that aborts the whole validation call.
///
/// The wrapped error is available through [`InternalError::internal`].
#[derive(Clone)]
pub struct InternalError {
    inner: Arc<dyn std::error::Error + Send + Sync + 'static>,
}

impl InternalError {
    /// Wraps an arbitrary error.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Wraps a boxed error, or builds one from a plain message.
    pub fn from_boxed(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            inner: Arc::from(error.into()),
        }
    }

    /// The wrapped failure.
    pub fn internal(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to view the wrapped failure as a concrete type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Debug for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InternalError").field(&self.inner).finish()
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for InternalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.inner)
    }
}

impl PartialEq for InternalError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.to_string() == other.inner.to_string()
    }
}

impl From<StructuralError> for InternalError {
    fn from(error: StructuralError) -> Self {
        Self::new(error)
    }
}

// ============================================================================
// VALIDATION ERRORS (keyed aggregate)
// ============================================================================

/// Validation failures keyed by field name, map key or element index.
///
/// Keys are kept sorted, so rendering and serialization are deterministic.
/// Entries may be absent (`None`) while the aggregate is being assembled;
/// [`filter`](Self::filter) drops them.
///
/// The string form joins `key: message` pairs with `"; "` and terminates
/// with a period. Nested aggregates are wrapped in parentheses:
///
/// ```text
/// Address: (City: cannot be blank.); Name: cannot be blank.
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    entries: BTreeMap<String, Option<Error>>,
}

impl ValidationErrors {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, error: impl Into<Error>) {
        self.entries.insert(key.into(), Some(error.into()));
    }

    /// Records an optional error under `key`.
    pub fn set(&mut self, key: impl Into<String>, error: Option<Error>) {
        self.entries.insert(key.into(), error);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, error: impl Into<Error>) -> Self {
        self.insert(key, error);
        self
    }

    /// The error recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Error> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Returns `true` if `key` holds an error.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys, including keys without an error.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over recorded errors in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|e| (k.as_str(), e)))
    }

    /// Keys holding an error, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Moves every entry of `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Drops absent entries; returns `None` when nothing is left.
    pub fn filter(mut self) -> Option<Self> {
        self.entries.retain(|_, v| v.is_some());
        if self.entries.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Converts the aggregate into a validation result.
    pub fn into_result(self) -> Result<(), Error> {
        match self.filter() {
            Some(errors) => Err(Error::Fields(errors)),
            None => Ok(()),
        }
    }

    /// Renders the aggregate as a JSON tree of messages.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for (key, error) in self.iter() {
            if written {
                f.write_str("; ")?;
            }
            match error {
                Error::Fields(nested) => write!(f, "{key}: ({nested})")?,
                other => write!(f, "{key}: {other}")?,
            }
            written = true;
        }
        if written {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, error) in self.iter() {
            map.serialize_entry(key, error)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Error>)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, Option<Error>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Error)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, Error)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k, Some(v))).collect()
    }
}

// ============================================================================
// ERROR (umbrella)
// ============================================================================

/// Outcome of a failed validation call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A single value failed a rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fields, keys or elements failed their rules.
    #[error(transparent)]
    Fields(#[from] ValidationErrors),

    /// Validation could not be carried out.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Shorthand for wrapping any error as an [`InternalError`].
    pub fn internal<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(InternalError::new(error))
    }

    /// Returns `true` for internal errors, which abort aggregation.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Error code of a single validation error.
    pub fn code(&self) -> Option<&str> {
        self.as_validation().map(ValidationError::code)
    }

    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub const fn as_fields(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Fields(e) => Some(e),
            _ => None,
        }
    }

    pub const fn as_internal(&self) -> Option<&InternalError> {
        match self {
            Self::Internal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructuralError> for Error {
    fn from(error: StructuralError) -> Self {
        Self::Internal(error.into())
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Validation(e) => e.serialize(serializer),
            Self::Fields(e) => e.serialize(serializer),
            Self::Internal(e) => serializer.collect_str(e),
        }
    }
}
