//! exercise-tracker server entry point.
//!
//! Starts the Axum HTTP server over a SQLite-backed store.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use exercise_tracker::api;
use exercise_tracker::app_state::AppState;
use exercise_tracker::config::TrackerConfig;
use exercise_tracker::store::ExerciseStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = TrackerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting exercise-tracker");

    // Open the store and apply the schema
    let store =
        ExerciseStore::connect(&config.database_path, config.database_max_connections).await?;

    // Build application state
    let app_state = AppState::new(store);

    // Build router with a static-file fallback for the client bundle
    let app = Router::new()
        .merge(api::build_router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
