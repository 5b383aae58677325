//! Domain service computing per-period invoices.

use crate::domain::EmployeeId;
use crate::models::Invoice;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for InvoiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for InvoiceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait InvoiceService: Send + Sync {
    /// Totals the hours of `employee_id` in `period` and bills them at the
    /// employee's rate. The period is only trimmed; a label without entries,
    /// including one that could never be recorded, yields a zero invoice.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::EmployeeNotFound`] for an unknown employee.
    async fn compute_invoice(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> Result<Invoice, InvoiceError>;
}
