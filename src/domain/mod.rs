//! Domain primitives for hour registration and invoicing.
//!
//! Newtypes keep employee ids apart from other integers and make sure a
//! billing period or an amount has been checked before it reaches the store.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Longest period label accepted from a form.
pub const MAX_PERIOD_LEN: usize = 64;

/// Rejected domain input. The message is safe to show to a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} is verplicht")]
    Required(&'static str),

    #[error("{field} moet een getal zijn van 0 of hoger")]
    Negative { field: &'static str },

    #[error("{field} is geen geldig getal")]
    NotFinite { field: &'static str },

    #[error("periode mag maximaal {MAX_PERIOD_LEN} tekens bevatten")]
    PeriodTooLong,

    #[error("periode bevat ongeldige tekens")]
    PeriodInvalidChars,
}

/// Unique identifier of an employee.
///
/// ```rust
/// use urenstaat::domain::EmployeeId;
///
/// let id = EmployeeId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EmployeeId(i32);

impl EmployeeId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmployeeId> for i32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for EmployeeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

/// Free-form billing period label such as `2024-03`.
///
/// Labels are compared and sorted as plain strings, so `2024-10` sorts
/// before `2024-2`. Zero-pad month numbers to get calendar order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period(String);

impl Period {
    /// Trims the label and checks it is non-empty, short and printable.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Required("periode"));
        }

        if trimmed.chars().count() > MAX_PERIOD_LEN {
            return Err(DomainError::PeriodTooLong);
        }

        if trimmed.chars().any(char::is_control) {
            return Err(DomainError::PeriodInvalidChars);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Trims the label without the length and character rules of
    /// [`Period::parse`]. Used for lookups: a label that could never have
    /// been stored simply matches nothing.
    #[must_use]
    pub fn lookup(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Period {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Checks that a rate or an hour count is a finite number of zero or more.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(DomainError::Negative { field });
    }
    Ok(value)
}

/// Trims a required text field.
pub fn required_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank input becomes `None`.
#[must_use]
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
