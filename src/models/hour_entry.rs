use serde::Serialize;

use crate::domain::EmployeeId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourEntry {
    pub id: i32,
    pub employee_id: EmployeeId,
    pub period: String,
    pub hours: f64,
    pub created_at: String,
}

/// Unvalidated hour registration.
#[derive(Debug, Clone)]
pub struct NewHourEntry {
    pub employee_id: EmployeeId,
    pub period: String,
    pub hours: f64,
}
