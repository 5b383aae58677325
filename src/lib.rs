pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

use anyhow::Context;
use std::path::Path;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use state::SharedState;

/// Loads the config named on the command line, or searches the default locations.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,

        Commands::Init => {
            if Config::create_default_if_missing(cli.config.as_deref())? {
                println!("✓ Config file created. Edit it and run again.");
            } else {
                println!("Config file already exists, left unchanged.");
            }
            Ok(())
        }

        Commands::CreateAdmin { username, password } => {
            let state = SharedState::new(config).await?;
            cli::cmd_create_admin(&state, &username, password.as_deref()).await
        }

        Commands::SetPassword { username, password } => {
            let state = SharedState::new(config).await?;
            cli::cmd_set_password(&state, &username, password.as_deref()).await
        }

        Commands::Employees => {
            let state = SharedState::new(config).await?;
            cli::cmd_list_employees(&state).await
        }

        Commands::Periods => {
            let state = SharedState::new(config).await?;
            cli::cmd_list_periods(&state).await
        }

        Commands::Invoice {
            employee_id,
            period,
        } => {
            let state = SharedState::new(config).await?;
            cli::cmd_invoice(&state, employee_id, &period).await
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialise logging")?;
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Urenstaat v{} starting...", env!("CARGO_PKG_VERSION"));

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    if !config.server.secure_cookies {
        tracing::warn!("Session cookie is sent without the Secure flag");
    }

    let state = web::create_app_state_from_config(config, prometheus_handle).await?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
