// handlers/users/delete.rs - DELETE /api/users/:id handler

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::UserService;

pub async fn user_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "user")?;
    UserService::new(state.pool).delete(id).await?;

    Ok(Json(json!({
        "message": "User deleted successfully",
        "id": id
    })))
}
