// handlers/users/update.rs - PUT /api/users/:id handler

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::{User, UserPatch};
use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::UserService;

/// Partial update of name and/or role; `updatedAt` always refreshed.
pub async fn user_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id, "user")?;
    let updated = UserService::new(state.pool).update(id, patch).await?;
    Ok(Json(updated))
}
