// handlers/users/list.rs - GET /api/organizations/:org_id/users handler

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::UserService;

/// List an organization's users, newest first. An organization with no
/// users (or no organization at all) yields an empty array.
pub async fn user_list(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let org_id = parse_id(&org_id, "organization")?;
    let users = UserService::new(state.pool).list_by_organization(org_id).await?;
    Ok(Json(users))
}
