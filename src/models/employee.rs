use serde::Serialize;

use crate::domain::EmployeeId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub address: Option<String>,
    pub hourly_rate: f64,
    pub created_at: String,
}

/// Unvalidated employee input as it arrives from a form or the CLI.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub address: Option<String>,
    pub hourly_rate: f64,
}
