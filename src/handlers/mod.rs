// handlers/mod.rs - Route table and shared handler plumbing

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::error::ApiError;

pub mod organizations;
pub mod users;

/// Shared state for all handlers. Requests are otherwise independent; the
/// pool is the only thing they have in common.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/api/organizations",
            get(organizations::organization_list).post(organizations::organization_create),
        )
        .route(
            "/api/organizations/:id",
            get(organizations::organization_show)
                .put(organizations::organization_update)
                .delete(organizations::organization_delete),
        )
        .route(
            "/api/organizations/:org_id/users",
            get(users::user_list).post(users::user_create),
        )
        .route("/api/users/:id", put(users::user_update).delete(users::user_delete))
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "org-console-api",
        "description": "REST backend for the organization administration console"
    }))
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    crate::database::pool::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}

/// Parse a numeric path id before anything touches the store. Non-numeric
/// input is a 400, not a 404.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", entity)))
}

/// Required create fields treat an empty string the same as a missing key.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
