//! Threshold rules: [`min`] and [`max`].
//!
//! The threshold decides how the validated value is read: an integer
//! threshold converts the value to `i64`, an unsigned one to `u64`, a float
//! one to `f64`. With the `temporal` feature, a `DateTime<Utc>` threshold
//! compares timestamps. Nil and empty values pass.

use std::cmp::Ordering;

use crate::foundation::{Error, Rule, StructuralError, ToValue, ValidationError, Value};
use crate::macros::impl_with_error;

pub const ERR_MIN_GREATER_EQUAL_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_min_greater_equal_than_required",
    "must be no less than {{.threshold}}",
);
pub const ERR_MIN_GREATER_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_min_greater_than_required",
    "must be greater than {{.threshold}}",
);
pub const ERR_MAX_LESS_EQUAL_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_max_less_equal_than_required",
    "must be no greater than {{.threshold}}",
);
pub const ERR_MAX_LESS_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_max_less_than_required",
    "must be less than {{.threshold}}",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Compares a value with a threshold. See [`min`] and [`max`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    threshold: Value,
    bound: Bound,
    exclusive: bool,
    err: ValidationError,
}

/// Fails if the value is less than `threshold`.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::prelude::*;
///
/// assert!(validate(&18, &rules![min(18)]).is_ok());
/// assert!(validate(&18, &rules![min(18).exclusive()]).is_err());
/// ```
pub fn min(threshold: impl ToValue) -> ThresholdRule {
    ThresholdRule::new(threshold.to_value(), Bound::Min)
}

/// Fails if the value is greater than `threshold`.
pub fn max(threshold: impl ToValue) -> ThresholdRule {
    ThresholdRule::new(threshold.to_value(), Bound::Max)
}

impl ThresholdRule {
    fn new(threshold: Value, bound: Bound) -> Self {
        let mut rule = Self {
            threshold,
            bound,
            exclusive: false,
            err: ERR_MIN_GREATER_EQUAL_THAN_REQUIRED,
        };
        rule.err = rule.default_error();
        rule
    }

    /// Makes the comparison strict. Resets the error to the matching default.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self.err = self.default_error();
        self
    }

    pub fn threshold(&self) -> &Value {
        &self.threshold
    }

    fn default_error(&self) -> ValidationError {
        let template = match (self.bound, self.exclusive) {
            (Bound::Min, false) => ERR_MIN_GREATER_EQUAL_THAN_REQUIRED,
            (Bound::Min, true) => ERR_MIN_GREATER_THAN_REQUIRED,
            (Bound::Max, false) => ERR_MAX_LESS_EQUAL_THAN_REQUIRED,
            (Bound::Max, true) => ERR_MAX_LESS_THAN_REQUIRED,
        };
        template.with_param("threshold", self.threshold_param())
    }

    fn threshold_param(&self) -> serde_json::Value {
        match &self.threshold {
            Value::Opaque(o) => serde_json::Value::String(o.to_string()),
            other => other.to_json(),
        }
    }

    /// Orders `value` relative to the threshold, converting it first.
    fn compare(&self, value: &Value) -> Result<Option<Ordering>, Error> {
        match &self.threshold {
            Value::Int(t) => Ok(Some(value.to_i64()?.cmp(t))),
            Value::Uint(t) => Ok(Some(value.to_u64()?.cmp(t))),
            Value::Float(t) => Ok(value.to_f64()?.partial_cmp(t)),
            #[cfg(feature = "temporal")]
            threshold @ Value::Opaque(_) => temporal::compare(threshold, value),
            other => Err(StructuralError::UnsupportedType(other.type_name()).into()),
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match (self.bound, self.exclusive) {
            (Bound::Min, false) => ordering != Ordering::Less,
            (Bound::Min, true) => ordering == Ordering::Greater,
            (Bound::Max, false) => ordering != Ordering::Greater,
            (Bound::Max, true) => ordering == Ordering::Less,
        }
    }
}

impl Rule for ThresholdRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        match self.compare(value)? {
            Some(ordering) if self.accepts(ordering) => Ok(()),
            _ => Err(self.err.clone().into()),
        }
    }
}

impl_with_error!(ThresholdRule);

#[cfg(feature = "temporal")]
mod temporal {
    use std::cmp::Ordering;

    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    use crate::foundation::{ERR_CONVERSION, Error, StructuralError, Value};

    fn timestamp(value: &Value) -> Option<NaiveDateTime> {
        if let Some(dt) = value.downcast_opaque::<DateTime<Utc>>() {
            return Some(dt.naive_utc());
        }
        if let Some(dt) = value.downcast_opaque::<NaiveDateTime>() {
            return Some(*dt);
        }
        value
            .downcast_opaque::<NaiveDate>()
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
    }

    pub(super) fn compare(threshold: &Value, value: &Value) -> Result<Option<Ordering>, Error> {
        let Some(threshold) = timestamp(threshold) else {
            return Err(StructuralError::UnsupportedType(threshold.type_name()).into());
        };
        match timestamp(value) {
            Some(value) => Ok(Some(value.cmp(&threshold))),
            None => Err(ERR_CONVERSION
                .with_param("from", value.type_name())
                .with_param("to", "datetime")
                .into()),
        }
    }
}
