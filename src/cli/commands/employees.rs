//! Listing commands

use crate::state::SharedState;
use crate::web::views::format_money;

pub async fn cmd_list_employees(state: &SharedState) -> anyhow::Result<()> {
    let employees = state.employee_service.list_employees().await?;

    if employees.is_empty() {
        println!("No employees yet.");
        return Ok(());
    }

    println!("Employees ({} total)", employees.len());
    println!("{:-<70}", "");

    for e in employees {
        println!(
            "{:>4}  {:<30} {:>12}  {}",
            e.id,
            e.name,
            format_money(e.hourly_rate),
            e.address.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn cmd_list_periods(state: &SharedState) -> anyhow::Result<()> {
    let periods = state.hour_service.list_periods().await?;

    if periods.is_empty() {
        println!("No hours recorded yet.");
        return Ok(());
    }

    for period in periods {
        println!("{period}");
    }

    Ok(())
}
