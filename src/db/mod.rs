use crate::config::SecurityConfig;
use crate::domain::EmployeeId;
use crate::models::{Employee, HourEntry};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::user::User;

/// Handle to the database pool. Cheap to clone; every clone shares the pool,
/// and each query checks a connection out for its own duration only.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path) = sqlite_file_path(db_url) {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
            if !path.exists() {
                std::fs::File::create(path).with_context(|| {
                    format!("Failed to create database file {}", path.display())
                })?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn employee_repo(&self) -> repositories::employee::EmployeeRepository {
        repositories::employee::EmployeeRepository::new(self.conn.clone())
    }

    fn hour_repo(&self) -> repositories::hour_entry::HourEntryRepository {
        repositories::hour_entry::HourEntryRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo().create(username, password, config).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<bool> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn update_user_password(
        &self,
        username: &str,
        new_password: &str,
        config: &SecurityConfig,
    ) -> Result<bool> {
        self.user_repo()
            .update_password(username, new_password, config)
            .await
    }

    pub async fn get_user_password_hash(&self, username: &str) -> Result<Option<String>> {
        self.user_repo().password_hash(username).await
    }

    // ========================================================================
    // Employees
    // ========================================================================

    pub async fn add_employee(
        &self,
        name: &str,
        address: Option<&str>,
        hourly_rate: f64,
    ) -> Result<Employee> {
        self.employee_repo().add(name, address, hourly_rate).await
    }

    pub async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>> {
        self.employee_repo().get(id).await
    }

    pub async fn employee_exists(&self, id: EmployeeId) -> Result<bool> {
        self.employee_repo().exists(id).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.employee_repo().list().await
    }

    // ========================================================================
    // Hour entries
    // ========================================================================

    pub async fn add_hour_entry(
        &self,
        employee_id: EmployeeId,
        period: &str,
        hours: f64,
    ) -> Result<HourEntry> {
        self.hour_repo().add(employee_id, period, hours).await
    }

    pub async fn get_hour_entries(
        &self,
        employee_id: EmployeeId,
        period: &str,
    ) -> Result<Vec<HourEntry>> {
        self.hour_repo()
            .for_employee_period(employee_id, period)
            .await
    }

    pub async fn list_periods(&self) -> Result<Vec<String>> {
        self.hour_repo().distinct_periods().await
    }

    pub async fn count_hour_entries(&self) -> Result<u64> {
        self.hour_repo().count().await
    }
}

/// File path of a `sqlite:` URL, or `None` for in-memory and non-SQLite URLs.
fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    let rest = db_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Some(Path::new(path))
}
