//! Invoice command handler

use crate::domain::EmployeeId;
use crate::services::InvoiceError;
use crate::state::SharedState;
use crate::web::views::{format_decimal, format_money};

pub async fn cmd_invoice(state: &SharedState, employee_id: i32, period: &str) -> anyhow::Result<()> {
    let invoice = match state
        .invoice_service
        .compute_invoice(EmployeeId::new(employee_id), period)
        .await
    {
        Ok(invoice) => invoice,
        Err(InvoiceError::EmployeeNotFound(id)) => {
            println!("Employee {id} not found.");
            println!("Use 'urenstaat employees' to see IDs");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let employee = &invoice.employee;
    println!("Invoice {} - {}", employee.name, invoice.period);
    if let Some(address) = &employee.address {
        println!("{address}");
    }
    println!("{:-<40}", "");

    for entry in &invoice.entries {
        println!("{:<28} {:>10}", entry.created_at, format_decimal(entry.hours));
    }
    if invoice.entries.is_empty() {
        println!("(no hours in this period)");
    }

    println!("{:-<40}", "");
    println!("{:<28} {:>10}", "Total hours", format_decimal(invoice.total_hours));
    println!("{:<28} {:>10}", "Hourly rate", format_money(invoice.hourly_rate));
    println!("{:<28} {:>10}", "Amount", format_money(invoice.amount));

    Ok(())
}
