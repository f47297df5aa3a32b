// Forbid unwrap() in production code to prevent panics from corrupt data.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zoo_server::{AnimalStore, AppState, config::ServerConfig, router, storage::JsonFile};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zoo_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: data_file={}, listen_host={}, listen_port={}",
        config.data_file.display(),
        config.listen_host,
        config.listen_port
    );

    // Seed the in-memory collection from the backing file.
    // A missing file starts an empty collection; the first insert creates it.
    let store = match AnimalStore::open(JsonFile::new(&config.data_file)) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to load animals from {}: {e}",
                config.data_file.display()
            );
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} animals", store.len());

    let app = router(AppState::new(store));

    let addr = SocketAddr::new(config.listen_host, config.listen_port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        });

    tracing::info!("API server now on port {}!", config.listen_port);

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
