//! Core traits for the validation system
//!
//! - [`Rule`]: validates a single [`Value`]. Every rule, leaf or composite,
//!   implements it.
//! - [`Validatable`]: implemented by types that know how to validate
//!   themselves. The engine calls it before a value's rules run.
//! - [`WithError`]: shared `error` / `error_object` overrides of leaf rules.

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::{Error, ValidationContext, ValidationError, Value};

// ============================================================================
// RULE
// ============================================================================

/// A validation rule.
///
/// Rules are immutable once built and are shared between threads as
/// [`DynRule`]. A rule that does not care about the context only implements
/// [`validate`](Rule::validate); the context-aware entry point forwards to it.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{Error, Rule, ValidationError, Value};
///
/// struct Even;
///
/// impl Rule for Even {
///     fn validate(&self, value: &Value) -> Result<(), Error> {
///         match value {
///             Value::Int(i) if i % 2 != 0 => Err(ValidationError::new("even", "must be even").into()),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Validates `value`.
    fn validate(&self, value: &Value) -> Result<(), Error>;

    /// Validates `value` with access to the request-scoped context.
    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        let _ = ctx;
        self.validate(value)
    }

    /// Returns `true` if the engine must stop evaluating the rule list here.
    fn skips(&self) -> bool {
        false
    }
}

/// A shared, type-erased rule.
pub type DynRule = Arc<dyn Rule>;

impl<R: Rule + ?Sized> Rule for Arc<R> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), Error> {
        (**self).validate(value)
    }

    #[inline]
    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        (**self).validate_with_context(ctx, value)
    }

    #[inline]
    fn skips(&self) -> bool {
        (**self).skips()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    #[inline]
    fn validate(&self, value: &Value) -> Result<(), Error> {
        (**self).validate(value)
    }

    #[inline]
    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value) -> Result<(), Error> {
        (**self).validate_with_context(ctx, value)
    }

    #[inline]
    fn skips(&self) -> bool {
        (**self).skips()
    }
}

// ============================================================================
// SELF-VALIDATION
// ============================================================================

/// Types that validate themselves.
///
/// Attach an implementation to a struct's value model with
/// [`StructValue::validated_by`](crate::foundation::StructValue::validated_by);
/// the engine then runs it whenever that struct is validated, directly or as
/// a field, map value or list element.
pub trait Validatable: Send + Sync {
    fn validate(&self) -> Result<(), Error>;

    fn validate_with_context(&self, ctx: &ValidationContext) -> Result<(), Error> {
        let _ = ctx;
        self.validate()
    }
}

impl<V: Validatable + ?Sized> Validatable for Arc<V> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }

    fn validate_with_context(&self, ctx: &ValidationContext) -> Result<(), Error> {
        (**self).validate_with_context(ctx)
    }
}

impl<V: Validatable + ?Sized> Validatable for Box<V> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }

    fn validate_with_context(&self, ctx: &ValidationContext) -> Result<(), Error> {
        (**self).validate_with_context(ctx)
    }
}

// ============================================================================
// ERROR OVERRIDES
// ============================================================================

/// Leaf rules whose failure can be customized per call site.
pub trait WithError: Sized {
    /// The error reported on failure.
    fn template(&self) -> &ValidationError;

    fn template_mut(&mut self) -> &mut ValidationError;

    /// Replaces the message, keeping the code and parameters.
    #[must_use = "builder methods must be chained or built"]
    fn error(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        let updated = self.template().clone().with_message(message);
        *self.template_mut() = updated;
        self
    }

    /// Replaces the whole error.
    #[must_use = "builder methods must be chained or built"]
    fn error_object(mut self, error: ValidationError) -> Self {
        *self.template_mut() = error;
        self
    }
}
