use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod seed;
pub mod services;

pub use handlers::AppState;

/// Build the full application router. Exposed so integration tests can
/// mount it in-process.
pub fn app(state: AppState) -> Router {
    handlers::routes()
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
