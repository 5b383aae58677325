//! `SeaORM` implementation of the `InvoiceService` trait.

use crate::db::Store;
use crate::domain::{EmployeeId, Period};
use crate::models::Invoice;
use crate::services::invoice_service::{InvoiceError, InvoiceService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmInvoiceService {
    store: Store,
}

impl SeaOrmInvoiceService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InvoiceService for SeaOrmInvoiceService {
    async fn compute_invoice(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> Result<Invoice, InvoiceError> {
        let period = Period::lookup(period);

        let employee = self
            .store
            .get_employee(employee_id)
            .await?
            .ok_or(InvoiceError::EmployeeNotFound(employee_id))?;

        let entries = self
            .store
            .get_hour_entries(employee_id, period.as_str())
            .await?;

        let invoice = Invoice::compute(employee, period, entries);

        debug!(
            employee_id = %employee_id,
            period = %invoice.period,
            total_hours = invoice.total_hours,
            amount = invoice.amount,
            "Computed invoice"
        );
        metrics::counter!("invoices_computed_total").increment(1);

        Ok(invoice)
    }
}
