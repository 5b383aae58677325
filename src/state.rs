use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, EmployeeService, HourService, InvoiceService, SeaOrmAuthService,
    SeaOrmEmployeeService, SeaOrmHourService, SeaOrmInvoiceService,
};

/// Everything a request handler or CLI command needs, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub employee_service: Arc<dyn EmployeeService>,

    pub hour_service: Arc<dyn HourService>,

    pub invoice_service: Arc<dyn InvoiceService>,
}

impl SharedState {
    /// Opens the database pool described by `config` and wires the services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
        )) as Arc<dyn AuthService + Send + Sync + 'static>;

        let employee_service = Arc::new(SeaOrmEmployeeService::new(store.clone()))
            as Arc<dyn EmployeeService + Send + Sync + 'static>;

        let hour_service = Arc::new(SeaOrmHourService::new(store.clone()))
            as Arc<dyn HourService + Send + Sync + 'static>;

        let invoice_service = Arc::new(SeaOrmInvoiceService::new(store.clone()))
            as Arc<dyn InvoiceService + Send + Sync + 'static>;

        Self {
            config: Arc::new(config),
            store,
            auth_service,
            employee_service,
            hour_service,
            invoice_service,
        }
    }
}
