//! Domain service for employee records.

use crate::domain::DomainError;
use crate::models::{Employee, NewEmployee};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for EmployeeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for EmployeeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait EmployeeService: Send + Sync {
    /// Validates and stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeError::Validation`] for a blank name or a negative or
    /// non-finite hourly rate.
    async fn add_employee(&self, input: NewEmployee) -> Result<Employee, EmployeeError>;

    /// All employees in insertion order, unpaginated.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;
}
