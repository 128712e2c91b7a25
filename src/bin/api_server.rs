// src/bin/api_server.rs

use movie_watchlist::infra::config;
use movie_watchlist::transport;
use movie_watchlist::{JsonFileStore, MovieStore, WatchlistService};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(config::log_filter()))
        .init();

    // --- Store + service ---
    let data_file = config::data_file();
    let store = JsonFileStore::new(&data_file);
    let existing = store.load().await.len();
    tracing::info!(
        path = %data_file.display(),
        movies = existing,
        "using watchlist data file"
    );
    let store: Arc<dyn MovieStore> = Arc::new(store);
    let app_state = transport::http::AppState {
        service: Arc::new(WatchlistService::new(store)),
    };

    // --- Frontend ---
    let frontend_dir = config::frontend_dir();
    match &frontend_dir {
        Some(dir) => tracing::info!(dir = %dir.display(), "serving frontend"),
        None => tracing::info!("no frontend directory found, serving the API only"),
    }

    // --- API server ---
    let app = transport::http::create_router(app_state, frontend_dir.as_deref());
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, stopping");
        }
    }

    Ok(())
}
