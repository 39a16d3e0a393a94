//! Core validation types and traits
//!
//! This module contains the building blocks every rule and combinator is
//! written against:
//!
//! - **Values**: [`Value`], [`Kind`], [`MapValue`], [`StructValue`] and the
//!   [`ToValue`] conversion trait
//! - **Traits**: [`Rule`], [`Validatable`], [`WithError`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`InternalError`]
//!   and the umbrella [`Error`]
//! - **Context**: [`ValidationContext`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use covalid::foundation::{ToValue, Value};
//!
//! assert!(Value::Nil.is_empty());
//! assert!(Some("").to_value().is_empty());
//! assert!(!42.to_value().is_empty());
//! ```

mod context;
mod convert;
mod error;
mod traits;
mod value;

pub use context::{ValidationContext, ValidationContextBuilder};
pub use convert::{ToMapKey, ToValue};
pub use error::{
    Error, InternalError, ParamValue, StructuralError, ValidationError, ValidationErrors,
};
pub use traits::{DynRule, Rule, Validatable, WithError};
pub use value::{
    ERR_CONVERSION, ERR_NOT_STRING, FieldValue, KeyKind, Kind, MapKey, MapValue, Opaque,
    StructValue, TextRef, Value, ensure_string, indirect, is_empty, string_or_bytes,
};
