// handlers/users/create.rs - POST /api/organizations/:org_id/users handler

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::database::models::{NewUser, User, UserRole};
use crate::error::ApiError;
use crate::handlers::{non_empty, parse_id, AppState};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

pub async fn user_create(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let org_id = parse_id(&org_id, "organization")?;

    let Some(name) = non_empty(body.name) else {
        return Err(ApiError::bad_request("Name is required"));
    };

    let created = UserService::new(state.pool)
        .create(org_id, NewUser { name, role: body.role })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
