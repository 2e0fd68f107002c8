use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::cache::connect_cache_store;
use catalog_api::config::{LogFormat, ServerConfig};
use catalog_api::rate_limit::connect_rate_limit_store;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::repositories::{PgDirectorRepository, PgMovieRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "catalog_api=debug,catalog_core=debug,catalog_db=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match LogFormat::from_env() {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    // --- Configuration ---
    let config = Arc::new(ServerConfig::from_env().context("Invalid server configuration")?);
    tracing::info!(
        host = %config.host,
        port = config.port,
        environment = ?config.environment,
        app = %config.app_name,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = catalog_db::create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    catalog_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    catalog_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Stores ---
    let cache_store = connect_cache_store(&config).await;
    let limiter_store = connect_rate_limit_store(&config).await;

    // --- App state ---
    let state = AppState::wire(
        pool.clone(),
        Arc::clone(&config),
        Arc::new(PgMovieRepository::new(pool.clone())),
        Arc::new(PgDirectorRepository::new(pool.clone())),
        cache_store,
        limiter_store,
    );
    let cache = state.cache.clone();
    let rate_limiter = state.rate_limiter.clone();

    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(config.host.parse().context("Invalid HOST address")?, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    let cleanup = async {
        match cache.clear().await {
            Ok(()) => tracing::info!("Cache cleared"),
            Err(err) => tracing::warn!(error = %err, "Failed to clear cache"),
        }
        match rate_limiter.close().await {
            Ok(()) => tracing::info!("Rate limiter store closed"),
            Err(err) => tracing::warn!(error = %err, "Failed to close rate limiter store"),
        }
        pool.close().await;
        tracing::info!("Database pool closed");
    };

    let limit = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(limit, cleanup).await.is_err() {
        tracing::error!(timeout_secs = config.shutdown_timeout_secs, "Shutdown timed out, forcing exit");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
