use goodreads_api::{router, BookStore, Config, StartupError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Single-threaded event loop; every store call goes through one connection.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let store = BookStore::connect(&config.database_url).await?;
    store.init_schema().await?;

    tracing::info!(database = %config.database_url, "Database connection established.");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!("Server Running at http://{}/", addr);

    axum::serve(listener, router(store.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    store.close().await;
    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
