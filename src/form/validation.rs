//! Parsing and range checks for the scalar form fields

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use super::field::FieldId;

pub const AGE_RANGE: (u8, u8) = (0, 120);
pub const HEART_RATE_RANGE: (u16, u16) = (20, 300);
pub const TEMPERATURE_RANGE: (f64, f64) = (90.0, 110.0);
pub const OXYGEN_RANGE: (u8, u8) = (0, 100);
pub const PAIN_RANGE: (u8, u8) = (0, 10);

/// Why the form cannot be turned into a record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("{} is required", .field.label())]
    Required { field: FieldId },

    #[error("{} must be a number", .field.label())]
    NotANumber { field: FieldId },

    #[error("{} must be between {min} and {max}", .field.label())]
    OutOfRange {
        field: FieldId,
        min: String,
        max: String,
    },

    #[error("{} must be a date like 2024-01-15", .field.label())]
    InvalidDate { field: FieldId },
}

impl FormError {
    /// The field to focus so the user can fix it
    pub fn field(&self) -> FieldId {
        match self {
            FormError::Required { field }
            | FormError::NotANumber { field }
            | FormError::OutOfRange { field, .. }
            | FormError::InvalidDate { field } => *field,
        }
    }
}

/// Text fields are sent exactly as typed; only a blank value is rejected
pub fn required(field: FieldId, text: &str) -> Result<String, FormError> {
    if text.trim().is_empty() {
        return Err(FormError::Required { field });
    }
    Ok(text.to_string())
}

/// Blank optional text becomes `None`
pub fn optional(text: &str) -> Option<String> {
    (!text.trim().is_empty()).then(|| text.to_string())
}

pub fn number_in_range<T>(field: FieldId, text: &str, (min, max): (T, T)) -> Result<T, FormError>
where
    T: FromStr + PartialOrd + Display,
{
    let value: T = required(field, text)?
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber { field })?;

    // NaN fails both comparisons and lands here too
    if !(value >= min && value <= max) {
        return Err(FormError::OutOfRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

pub fn date(field: FieldId, text: &str) -> Result<NaiveDate, FormError> {
    let text = required(field, text)?;
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate { field })
}
