//! CLI administration tool for alias-shortener.
//!
//! Runs the same usecase as the HTTP service directly against the
//! PostgreSQL store, without going through the API or its rate limiter.
//!
//! # Usage
//!
//! ```bash
//! # Create an alias, optionally expiring
//! cargo run --bin admin -- shorten https://example.com/some/page
//! cargo run --bin admin -- shorten https://example.com --expires 2030-01-01_00:00:00
//!
//! # Resolve an alias (counts as a hit)
//! cargo run --bin admin -- resolve https://localhost:8080/u/5mWd0Jd3BDRIPmoHxFRGYa
//!
//! # Show hits of an alias
//! cargo run --bin admin -- count https://localhost:8080/u/5mWd0Jd3BDRIPmoHxFRGYa
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) and `BASE_URL`.
//! `DB_TYPE=memory` is rejected since nothing would outlive the command.

use alias_shortener::config::{self, Config, StoreType};
use alias_shortener::infrastructure::persistence::{PgHitCountRepository, PgMappingRepository};
use alias_shortener::prelude::*;
use alias_shortener::server::connect_database;
use alias_shortener::utils::expiration::{format_expiration, parse_expiration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the alias URL of a long URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Expiration in UTC, formatted YYYY-MM-DD_HH:MM:SS
        #[arg(short, long)]
        expires: Option<String>,
    },

    /// Resolve an alias URL to its original URL
    Resolve {
        /// Alias URL, e.g. https://localhost:8080/u/<alias>
        alias_url: String,
    },

    /// Show how many times an alias URL was resolved
    Count {
        /// Alias URL, e.g. https://localhost:8080/u/<alias>
        alias_url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_type != StoreType::Postgres {
        anyhow::bail!("admin commands require DB_TYPE=postgres");
    }

    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Shorten { url, expires } => shorten(&config, pool, &url, expires).await?,
        Commands::Resolve { alias_url } => resolve(&config, pool, &alias_url).await?,
        Commands::Count { alias_url } => count(&config, pool, &alias_url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the usecase stack on top of the PostgreSQL store.
fn usecase(config: &Config, pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgMappingRepository::new(pool.clone())),
        Arc::new(PgHitCountRepository::new(pool)),
        config.base_url.clone(),
    )
}

async fn shorten(config: &Config, pool: PgPool, url: &str, expires: Option<String>) -> Result<()> {
    let expires_at = expires
        .as_deref()
        .map(parse_expiration)
        .transpose()
        .context("--expires must be formatted YYYY-MM-DD_HH:MM:SS")?;

    let state = usecase(config, pool);
    let shortened = state
        .shortener
        .shorten(url, expires_at)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!("{}", "✅ Alias created".green().bold());
    println!();
    println!("  URL:     {}", url.cyan());
    println!("  Alias:   {}", shortened.bright_green().bold());
    match expires_at {
        Some(at) => println!("  Expires: {} UTC", format_expiration(at).yellow()),
        None => println!("  Expires: {}", "never".bright_black()),
    }
    println!();

    Ok(())
}

async fn resolve(config: &Config, pool: PgPool, alias_url: &str) -> Result<()> {
    let state = usecase(config, pool);

    match state.shortener.unshorten(alias_url).await {
        Ok(original) => {
            println!("{}", original.bright_green());
            Ok(())
        }
        Err(e) if e.is_client_error() => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve: {}", e)),
    }
}

async fn count(config: &Config, pool: PgPool, alias_url: &str) -> Result<()> {
    let state = usecase(config, pool);
    let hits = state
        .shortener
        .hits(alias_url)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Alias: {}", alias_url.cyan());
    println!("  Hits:  {}", hits.to_string().bright_green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
                .fetch_one(pool)
                .await?;
            let hits: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(hits), 0)::BIGINT FROM hit_counts")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Aliases:    {}", mappings.to_string().bright_green().bold());
            println!("  Hits:       {}", hits.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
