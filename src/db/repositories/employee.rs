use crate::domain::EmployeeId;
use crate::entities::{employees, prelude::*};
use crate::models::Employee;
use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

/// Repository for employee records
pub struct EmployeeRepository {
    conn: DatabaseConnection,
}

impl EmployeeRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: employees::Model) -> Employee {
        Employee {
            id: EmployeeId::new(m.id),
            name: m.name,
            address: m.address,
            hourly_rate: m.hourly_rate,
            created_at: m.created_at,
        }
    }

    /// Inserts an already validated employee.
    pub async fn add(&self, name: &str, address: Option<&str>, hourly_rate: f64) -> Result<Employee> {
        let active = employees::ActiveModel {
            name: Set(name.to_string()),
            address: Set(address.map(ToString::to_string)),
            hourly_rate: Set(hourly_rate),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert employee")?;

        info!(employee_id = model.id, "Added employee {}", model.name);
        Ok(Self::map_model(model))
    }

    pub async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let row = Employees::find_by_id(id.value())
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query employee {id}"))?;

        Ok(row.map(Self::map_model))
    }

    pub async fn exists(&self, id: EmployeeId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// All employees in insertion order.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        let rows = Employees::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list employees")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}
