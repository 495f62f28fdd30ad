//! # Canchas API
//!
//! The API crate provides the web server for the court booking service.
//! It exposes RESTful endpoints for courts ("canchas") and their
//! reservations ("reservaciones").
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into scheduler calls
//! - **Middleware**: Error mapping and extractors with uniform rejections
//! - **Config**: Handle environment and application configuration
//!
//! The booking rules themselves live in `canchas-core`; storage is any
//! `BookingRepository` from `canchas-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping and request extractors
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use canchas_core::{repository::BookingRepository, scheduler::Scheduler};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Booking service backed by the configured storage
    pub scheduler: Scheduler<dyn BookingRepository>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self {
            scheduler: Scheduler::new(repo),
        }
    }
}

/// Installs the global `tracing` subscriber
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Court management endpoints
        .merge(routes::court::routes())
        // Reservation endpoints
        .merge(routes::reservation::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Wraps the router with tracing, timeout and, when configured, CORS layers
pub fn with_layers(app: Router, config: &config::ApiConfig) -> Result<Router> {
    let app = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
                })
                .collect::<Result<Vec<_>>>()?;

            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(origins)
                .allow_credentials(true);

            app.layer(cors)
        }
        None => app,
    };

    Ok(app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    ))
}

/// Starts the API server on top of the given storage
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let repo = Arc::new(MemoryBookingRepository::new());
/// start_server(config, repo).await?;
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    repo: Arc<dyn BookingRepository>,
) -> Result<()> {
    let state = Arc::new(ApiState::new(repo));
    let app = with_layers(build_router(state), &config)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
