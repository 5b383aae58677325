use axum::{
    Extension, Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use std::sync::Arc;

use super::{AppState, WebError, auth::CurrentUser, forms::HourForm, views};

/// GET /uren
pub async fn hours_form(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Html<String>, WebError> {
    let (employees, periods) = tokio::try_join!(
        async { state.employee_service().list_employees().await.map_err(WebError::from) },
        async { state.hour_service().list_periods().await.map_err(WebError::from) },
    )?;

    Ok(Html(views::hours_page(&user, &employees, &periods)))
}

/// POST /uren
pub async fn record_hours(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HourForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form.map_err(|e| WebError::validation(e.body_text()))?;
    let input = form.into_new_entry()?;

    state.hour_service().record_hours(input).await?;

    Ok(Redirect::to("/uren"))
}
