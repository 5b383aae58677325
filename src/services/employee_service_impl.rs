//! `SeaORM` implementation of the `EmployeeService` trait.

use crate::db::Store;
use crate::domain;
use crate::models::{Employee, NewEmployee};
use crate::services::employee_service::{EmployeeError, EmployeeService};
use async_trait::async_trait;

pub struct SeaOrmEmployeeService {
    store: Store,
}

impl SeaOrmEmployeeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmployeeService for SeaOrmEmployeeService {
    async fn add_employee(&self, input: NewEmployee) -> Result<Employee, EmployeeError> {
        let name = domain::required_text("naam", &input.name)?;
        let address = domain::optional_text(input.address.as_deref());
        let hourly_rate = domain::non_negative("uursalaris", input.hourly_rate)?;

        let employee = self
            .store
            .add_employee(&name, address.as_deref(), hourly_rate)
            .await?;

        metrics::counter!("employees_created_total").increment(1);
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.store.list_employees().await?)
    }
}
