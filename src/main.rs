//! Example CRUD API - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use example_service::application::services::DefaultExampleService;
use example_service::infrastructure::driven_adapters::config::AppConfig;
use example_service::infrastructure::driven_adapters::database;
use example_service::infrastructure::driven_adapters::PostgresExampleRepository;
use example_service::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "example_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("database connection pool created");

    // Ensure the examples table exists
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations completed");

    // Wire repository and service
    let example_repository = Arc::new(PostgresExampleRepository::new(pool.clone()));
    let example_service = Arc::new(DefaultExampleService::new(example_repository));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_secs);

    // Create application state and router
    let app_state = AppState {
        config: Arc::new(config),
        example_service,
    };
    let app = api_rest::router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(grace))
        .await?;

    // The storage handle closes only after the listener has fully stopped
    pool.close().await;
    tracing::info!("server exited properly");

    Ok(())
}

/// Resolves on SIGINT/SIGTERM, at which point the server stops accepting new
/// connections and drains in-flight requests. A watchdog force-exits the
/// process if draining outlives the grace period.
async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining in-flight requests");

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        tracing::error!("graceful shutdown timed out, forcing exit");
        std::process::exit(1);
    });
}
