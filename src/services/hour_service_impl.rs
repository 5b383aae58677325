//! `SeaORM` implementation of the `HourService` trait.

use crate::db::Store;
use crate::domain::{self, Period};
use crate::models::{HourEntry, NewHourEntry};
use crate::services::hour_service::{HourError, HourService};
use async_trait::async_trait;

pub struct SeaOrmHourService {
    store: Store,
}

impl SeaOrmHourService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HourService for SeaOrmHourService {
    async fn record_hours(&self, input: NewHourEntry) -> Result<HourEntry, HourError> {
        let period = Period::parse(&input.period)?;
        let hours = domain::non_negative("aantal uren", input.hours)?;

        if !self.store.employee_exists(input.employee_id).await? {
            return Err(HourError::EmployeeNotFound(input.employee_id));
        }

        let entry = self
            .store
            .add_hour_entry(input.employee_id, period.as_str(), hours)
            .await?;

        metrics::counter!("hour_entries_recorded_total").increment(1);
        Ok(entry)
    }

    async fn list_periods(&self) -> Result<Vec<String>, HourError> {
        Ok(self.store.list_periods().await?)
    }
}
