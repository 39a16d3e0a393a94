//! Date rule
//!
//! Parses text with a chrono `strftime` layout and optionally checks the
//! parsed instant against a `[min, max]` window. Layouts with an offset
//! (`%z`) are normalized to UTC; layouts without a time of day parse as
//! midnight UTC.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::foundation::{Error, Rule, ValidationError, Value, ensure_string};
use crate::macros::impl_with_error;

pub const ERR_DATE_INVALID: ValidationError =
    ValidationError::from_static("validation_date_invalid", "must be a valid date");
pub const ERR_DATE_OUT_OF_RANGE: ValidationError =
    ValidationError::from_static("validation_date_out_of_range", "the date is out of range");

/// Checks that text is a date in a given layout. See [`date`].
#[derive(Debug, Clone, PartialEq)]
pub struct DateRule {
    layout: Cow<'static, str>,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    err: ValidationError,
    range_err: ValidationError,
}

/// Fails unless the text parses with `layout`.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::prelude::*;
///
/// assert!(validate("2024-02-29", &rules![date("%Y-%m-%d")]).is_ok());
/// assert!(validate("2023-02-29", &rules![date("%Y-%m-%d")]).is_err());
/// ```
pub fn date(layout: impl Into<Cow<'static, str>>) -> DateRule {
    DateRule {
        layout: layout.into(),
        min: None,
        max: None,
        err: ERR_DATE_INVALID,
        range_err: ERR_DATE_OUT_OF_RANGE,
    }
}

impl DateRule {
    /// Rejects dates before `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Rejects dates after `max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    /// Replaces the out-of-range message.
    #[must_use = "builder methods must be chained or built"]
    pub fn range_error(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.range_err = self.range_err.with_message(message);
        self
    }

    /// Replaces the out-of-range error.
    #[must_use = "builder methods must be chained or built"]
    pub fn range_error_object(mut self, error: ValidationError) -> Self {
        self.range_err = error;
        self
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let layout = self.layout.as_ref();
        if let Ok(dt) = DateTime::parse_from_str(text, layout) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(dt.and_utc());
        }
        NaiveDate::parse_from_str(text, layout)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    fn in_range(&self, instant: DateTime<Utc>) -> bool {
        self.min.is_none_or(|min| instant >= min) && self.max.is_none_or(|max| instant <= max)
    }
}

impl Rule for DateRule {
    fn validate(&self, value: &Value) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        let text = ensure_string(value)?;
        match self.parse(&text) {
            None => Err(self.err.clone().into()),
            Some(instant) if !self.in_range(instant) => Err(self.range_err.clone().into()),
            Some(_) => Ok(()),
        }
    }
}

impl_with_error!(DateRule);
