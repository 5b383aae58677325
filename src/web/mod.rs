use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, EmployeeService, HourService, InvoiceService};
use crate::state::SharedState;

pub mod auth;
mod employees;
mod error;
pub mod forms;
mod home;
mod hours;
mod invoices;
mod observability;
pub mod views;

pub use error::WebError;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn employee_service(&self) -> &Arc<dyn EmployeeService> {
        &self.shared.employee_service
    }

    #[must_use]
    pub fn hour_service(&self) -> &Arc<dyn HourService> {
        &self.shared.hour_service
    }

    #[must_use]
    pub fn invoice_service(&self) -> &Arc<dyn InvoiceService> {
        &self.shared.invoice_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config().server;

    let expiry = server
        .session_idle_minutes
        .map_or(Expiry::OnSessionEnd, |minutes| {
            Expiry::OnInactivity(time::Duration::minutes(minutes))
        });

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(server.cookie_name.clone())
        .with_secure(server.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(expiry);

    let protected_routes = create_protected_router();

    Router::new()
        .merge(protected_routes)
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/health", get(observability::health))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state)
}

fn create_protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home::home))
        .route(
            "/werknemers",
            get(employees::list_employees).post(employees::add_employee),
        )
        .route("/uren", get(hours::hours_form).post(hours::record_hours))
        .route("/factuur", get(invoices::invoice_selection))
        .route("/factuur_resultaat", get(invoices::invoice_redirect))
        .route(
            "/factuur/{employee_id}/{period}",
            get(invoices::show_invoice),
        )
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(auth::auth_middleware))
}
