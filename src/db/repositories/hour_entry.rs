use crate::domain::EmployeeId;
use crate::entities::{hour_entries, prelude::*};
use crate::models::HourEntry;
use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;

/// Repository for registered hours
pub struct HourEntryRepository {
    conn: DatabaseConnection,
}

impl HourEntryRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: hour_entries::Model) -> HourEntry {
        HourEntry {
            id: m.id,
            employee_id: EmployeeId::new(m.employee_id),
            period: m.period,
            hours: m.hours,
            created_at: m.created_at,
        }
    }

    /// Inserts an already validated entry. The employee must exist.
    pub async fn add(&self, employee_id: EmployeeId, period: &str, hours: f64) -> Result<HourEntry> {
        let active = hour_entries::ActiveModel {
            employee_id: Set(employee_id.value()),
            period: Set(period.to_string()),
            hours: Set(hours),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert hour entry")?;

        info!(
            employee_id = model.employee_id,
            period = %model.period,
            hours = model.hours,
            "Recorded hours"
        );
        Ok(Self::map_model(model))
    }

    /// Entries of one employee in one period, oldest first.
    pub async fn for_employee_period(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> Result<Vec<HourEntry>> {
        let rows = HourEntries::find()
            .filter(hour_entries::Column::EmployeeId.eq(employee_id.value()))
            .filter(hour_entries::Column::Period.eq(period))
            .order_by_asc(hour_entries::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query hour entries")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Every period label once, in the database's string order.
    pub async fn distinct_periods(&self) -> Result<Vec<String>> {
        HourEntries::find()
            .select_only()
            .column(hour_entries::Column::Period)
            .distinct()
            .order_by_asc(hour_entries::Column::Period)
            .into_tuple::<String>()
            .all(&self.conn)
            .await
            .context("Failed to query distinct periods")
    }

    pub async fn count(&self) -> Result<u64> {
        HourEntries::find()
            .count(&self.conn)
            .await
            .context("Failed to count hour entries")
    }
}
