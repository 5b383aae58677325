use axum::{
    Extension,
    extract::{Path, Query, State, rejection::PathRejection, rejection::QueryRejection},
    response::{Html, Response},
};
use std::sync::Arc;

use super::{
    AppState, WebError,
    auth::{CurrentUser, found},
    forms::{InvoiceSelection, parse_employee_id},
    views,
};

/// GET /factuur
pub async fn invoice_selection(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Html<String>, WebError> {
    let (employees, periods) = tokio::try_join!(
        async { state.employee_service().list_employees().await.map_err(WebError::from) },
        async { state.hour_service().list_periods().await.map_err(WebError::from) },
    )?;

    Ok(Html(views::invoice_selection_page(&user, &employees, &periods)))
}

/// GET /factuur_resultaat?werknemer_id=..&periode=..
///
/// Turns the selection form into the canonical invoice URL.
pub async fn invoice_redirect(
    query: Result<Query<InvoiceSelection>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(selection) = query.map_err(|e| WebError::validation(e.body_text()))?;
    let (employee_id, period) = selection.parse()?;

    Ok(found(&views::invoice_href(employee_id, period.as_str())))
}

/// GET /factuur/{employee_id}/{period}
pub async fn show_invoice(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Html<String>, WebError> {
    let Path((employee_id, period)) = path.map_err(|e| WebError::validation(e.body_text()))?;
    let employee_id = parse_employee_id(&employee_id)?;

    let invoice = state
        .invoice_service()
        .compute_invoice(employee_id, &period)
        .await?;

    Ok(Html(views::invoice_page(&user, &invoice)))
}
