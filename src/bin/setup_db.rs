//! Database Bootstrap Tool
//!
//! One-time administrative helper: connects to the admin `postgres` database
//! with the configured credentials and creates the target database if it
//! does not exist yet. Safe to run repeatedly.

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use example_service::infrastructure::driven_adapters::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setup_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let options = PgConnectOptions::from_str(&config.database.url)?;
    let target_db = options
        .get_database()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("database URL does not name a database"))?;

    // Connect to the default 'postgres' database with the same credentials
    let admin_options = options.database("postgres");
    let mut conn = PgConnection::connect_with(&admin_options).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&target_db)
            .fetch_one(&mut conn)
            .await?;

    if exists {
        tracing::info!(db_name = %target_db, "database already exists");
        return Ok(());
    }

    // CREATE DATABASE does not accept a bound identifier; this statement runs
    // once at provisioning time, never in the request path
    sqlx::query(&format!("CREATE DATABASE \"{target_db}\""))
        .execute(&mut conn)
        .await?;

    tracing::info!(db_name = %target_db, "database created successfully");

    Ok(())
}
