//! Macros for building rule lists and rule types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rules!`] - build a `Vec<DynRule>` from rule values
//! - `impl_with_error!` (crate-internal) - implement
//!   [`WithError`](crate::foundation::WithError) for rules storing their
//!   error template in an `err` field

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a rule list from any values implementing [`Rule`](crate::Rule).
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{length, required, rules, validate};
///
/// let name_rules = rules![required(), length(3, 20)];
/// validate("bob", &name_rules)?;
///
/// let none = rules![];
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<$crate::DynRule>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![$(::std::sync::Arc::new($rule) as $crate::DynRule),+]
    };
}

// ============================================================================
// WITH_ERROR MACRO
// ============================================================================

/// Implements `WithError` for rule types whose template lives in `err`.
macro_rules! impl_with_error {
    ($($rule:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::WithError for $rule {
                fn template(&self) -> &$crate::foundation::ValidationError {
                    &self.err
                }

                fn template_mut(&mut self) -> &mut $crate::foundation::ValidationError {
                    &mut self.err
                }
            }
        )+
    };
}

pub(crate) use impl_with_error;
