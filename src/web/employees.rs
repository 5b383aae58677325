use axum::{
    Extension, Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use std::sync::Arc;

use super::{AppState, WebError, auth::CurrentUser, forms::EmployeeForm, views};

/// GET /werknemers
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Html<String>, WebError> {
    let employees = state.employee_service().list_employees().await?;
    Ok(Html(views::employees_page(&user, &employees)))
}

/// POST /werknemers
pub async fn add_employee(
    State(state): State<Arc<AppState>>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form.map_err(|e| WebError::validation(e.body_text()))?;
    let input = form.into_new_employee()?;

    state.employee_service().add_employee(input).await?;

    Ok(Redirect::to("/werknemers"))
}
