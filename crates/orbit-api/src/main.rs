//! Orbit backend API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use orbit_api::error::AppError;
use orbit_api::state::AppState;
use orbit_appwrite::{AppwriteClient, AppwriteConfig};
use orbit_notifications::domain::dispatch::Dispatcher;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use orbit_api::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Orbit backend API server");

    // Read configuration from environment.
    let endpoint = std::env::var("APPWRITE_ENDPOINT")
        .unwrap_or_else(|_| "https://cloud.appwrite.io/v1".to_string());
    let project_id = std::env::var("APPWRITE_PROJECT_ID").map_err(|_| {
        AppError::Config("APPWRITE_PROJECT_ID environment variable must be set".into())
    })?;
    let api_key = std::env::var("APPWRITE_API_KEY")
        .map_err(|_| AppError::Config("APPWRITE_API_KEY environment variable must be set".into()))?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Build the delivery client and application state.
    let delivery = Arc::new(AppwriteClient::new(AppwriteConfig {
        endpoint,
        project_id,
        api_key,
    }));
    let dispatcher = Arc::new(Dispatcher::with_default_kinds());
    tracing::info!(
        kinds = ?dispatcher.kinds().collect::<Vec<_>>(),
        "registered notification kinds"
    );
    let app_state = AppState::new(delivery, dispatcher);

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/notifications", routes::notifications::router())
        .nest("/api/v1/accounts", routes::accounts::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;

    axum::serve(listener, app).await?;

    Ok(())
}
