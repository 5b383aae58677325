//! Form payloads and their conversion into domain input.
//!
//! Fields arrive as strings so that a typo in a number becomes a readable
//! validation message instead of an extractor rejection.

use serde::Deserialize;

use super::WebError;
use crate::domain::{EmployeeId, Period};
use crate::models::{NewEmployee, NewHourEntry};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub naam: String,
    #[serde(default)]
    pub adres: Option<String>,
    #[serde(default)]
    pub uursalaris: String,
}

#[derive(Debug, Deserialize)]
pub struct HourForm {
    #[serde(default)]
    pub werknemer_id: String,
    #[serde(default)]
    pub periode: String,
    #[serde(default)]
    pub aantal_uren: String,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceSelection {
    #[serde(default)]
    pub werknemer_id: String,
    #[serde(default)]
    pub periode: String,
}

/// Parses a decimal that may use a comma as separator (`12,5`).
pub fn parse_decimal(field: &str, raw: &str) -> Result<f64, WebError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WebError::validation(format!("{field} is verplicht")));
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| WebError::validation(format!("{field} is geen geldig getal: {trimmed}")))
}

pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, WebError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Ok(EmployeeId::new(id)),
        _ => Err(WebError::validation(format!(
            "Ongeldig werknemernummer: {trimmed}"
        ))),
    }
}

impl EmployeeForm {
    pub fn into_new_employee(self) -> Result<NewEmployee, WebError> {
        Ok(NewEmployee {
            hourly_rate: parse_decimal("uursalaris", &self.uursalaris)?,
            name: self.naam,
            address: self.adres,
        })
    }
}

impl HourForm {
    pub fn into_new_entry(self) -> Result<NewHourEntry, WebError> {
        Ok(NewHourEntry {
            employee_id: parse_employee_id(&self.werknemer_id)?,
            hours: parse_decimal("aantal uren", &self.aantal_uren)?,
            period: self.periode,
        })
    }
}

impl InvoiceSelection {
    pub fn parse(&self) -> Result<(EmployeeId, Period), WebError> {
        Ok((
            parse_employee_id(&self.werknemer_id)?,
            Period::parse(&self.periode)?,
        ))
    }
}
