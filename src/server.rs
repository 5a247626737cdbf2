//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, and Axum server lifecycle.

use crate::config::{Config, StoreType};
use crate::infrastructure::persistence::{PgHitCountRepository, PgMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured store (PostgreSQL pool plus migrations, or in-memory maps)
/// - The shorten/unshorten usecase with hit counting
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, config.rate_limit())?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds handler state on top of the store selected by `DB_TYPE`.
///
/// # Errors
///
/// Returns an error if the PostgreSQL store cannot be reached or migrated.
pub async fn build_state(config: &Config) -> Result<AppState> {
    match config.store_type {
        StoreType::Memory => {
            tracing::info!("Using in-memory store, data is lost on restart");
            Ok(AppState::in_memory(config.base_url.clone()))
        }
        StoreType::Postgres => {
            let pool = Arc::new(connect_database(config).await?);
            Ok(AppState::new(
                Arc::new(PgMappingRepository::new(pool.clone())),
                Arc::new(PgHitCountRepository::new(pool)),
                config.base_url.clone(),
            ))
        }
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the connection
/// fails, or a migration fails.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the PostgreSQL store")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
