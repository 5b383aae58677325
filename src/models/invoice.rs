use serde::Serialize;

use super::{Employee, HourEntry};
use crate::domain::Period;

/// Invoice for one employee over one billing period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub employee: Employee,
    pub period: Period,
    pub entries: Vec<HourEntry>,
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub amount: f64,
}

impl Invoice {
    /// Totals `entries` and bills them at the employee's hourly rate.
    ///
    /// Entries belonging to another employee or period are ignored, so the
    /// caller may pass a superset. No entries yields a zero invoice.
    #[must_use]
    pub fn compute(employee: Employee, period: Period, entries: Vec<HourEntry>) -> Self {
        let entries: Vec<HourEntry> = entries
            .into_iter()
            .filter(|e| e.employee_id == employee.id && e.period == period.as_str())
            .collect();

        let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
        let hourly_rate = employee.hourly_rate;

        Self {
            employee,
            period,
            entries,
            total_hours,
            hourly_rate,
            amount: total_hours * hourly_rate,
        }
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
