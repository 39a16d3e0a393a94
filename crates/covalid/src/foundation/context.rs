//! Request-scoped validation context
//!
//! A [`ValidationContext`] carries caller-supplied values (the current user,
//! a tenant id, limits loaded from configuration) to context-aware rules.
//! It is never modified while a validation call is running.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

static BACKGROUND: LazyLock<ValidationContext> = LazyLock::new(ValidationContext::new);

/// Typed key-value store passed to every rule during a validation call.
///
/// Lookups fall back to the parent context when a key is missing locally.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::ValidationContext;
///
/// let mut ctx = ValidationContext::new();
/// ctx.insert("max_items", 10usize);
/// assert_eq!(ctx.get::<usize>("max_items"), Some(&10));
/// ```
#[derive(Clone, Default)]
pub struct ValidationContext {
    values: HashMap<Cow<'static, str>, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<ValidationContext>>,
}

impl ValidationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared empty context used by the context-free entry points.
    pub fn background() -> &'static Self {
        &BACKGROUND
    }

    /// Creates an empty context that falls back to `parent`.
    pub fn with_parent(parent: Arc<Self>) -> Self {
        Self {
            values: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Stores a value, replacing any previous value under `key`.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<Cow<'static, str>>, value: T) {
        self.values.insert(key.into(), Arc::new(value));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a value of type `T`.
    ///
    /// Returns `None` when the key is missing or holds another type.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        match self.values.get(key) {
            Some(value) => value.downcast_ref::<T>(),
            None => self.parent.as_deref().and_then(|p| p.get(key)),
        }
    }

    /// Returns `true` if `key` is set here or in a parent.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.parent.as_deref().is_some_and(|p| p.contains(key))
    }

    /// Number of values stored locally.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(|k| &**k).collect();
        keys.sort_unstable();
        f.debug_struct("ValidationContext")
            .field("keys", &keys)
            .field("parent", &self.parent)
            .finish()
    }
}

/// Builder for [`ValidationContext`].
#[derive(Debug, Default)]
pub struct ValidationContextBuilder {
    context: ValidationContext,
}

impl ValidationContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.context.insert(key, value);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn parent(mut self, parent: Arc<ValidationContext>) -> Self {
        self.context.parent = Some(parent);
        self
    }

    pub fn build(self) -> ValidationContext {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let mut ctx = ValidationContext::new();
        ctx.insert("key", 42usize);

        assert_eq!(ctx.get::<usize>("key"), Some(&42));
        assert_eq!(ctx.get::<String>("key"), None);
        assert_eq!(ctx.get::<usize>("missing"), None);
    }

    #[test]
    fn test_parent_fallback() {
        let parent = Arc::new(ValidationContext::new().with("parent_key", 100usize));
        let child = ValidationContextBuilder::new()
            .parent(parent)
            .with("child_key", 200usize)
            .build();

        assert_eq!(child.get::<usize>("child_key"), Some(&200));
        assert_eq!(child.get::<usize>("parent_key"), Some(&100));
        assert!(child.contains("parent_key"));
        assert_eq!(child.len(), 1);
    }

    #[test]
    fn test_local_value_shadows_parent() {
        let parent = Arc::new(ValidationContext::new().with("key", "parent"));
        let child = ValidationContext::with_parent(parent).with("key", "child");
        assert_eq!(child.get::<&str>("key"), Some(&"child"));
    }

    #[test]
    fn test_background_is_empty() {
        assert!(ValidationContext::background().is_empty());
        assert!(ValidationContext::background().parent().is_none());
    }
}
