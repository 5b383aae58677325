//! Domain service for registering hours and listing billing periods.

use crate::domain::{DomainError, EmployeeId};
use crate::models::{HourEntry, NewHourEntry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HourError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for HourError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for HourError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait HourService: Send + Sync {
    /// Validates and stores an hour entry for an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`HourError::EmployeeNotFound`] when the employee does not
    /// exist and [`HourError::Validation`] for a blank period or a negative or
    /// non-finite hour count. Nothing is stored in either case.
    async fn record_hours(&self, input: NewHourEntry) -> Result<HourEntry, HourError>;

    /// Each recorded period label once, sorted as strings.
    async fn list_periods(&self) -> Result<Vec<String>, HourError>;
}
