// handlers/organizations/list.rs - GET /api/organizations handler

use axum::extract::State;
use axum::Json;

use crate::database::models::Organization;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::services::OrganizationService;

/// List all organizations, newest first.
pub async fn organization_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Organization>>, ApiError> {
    let orgs = OrganizationService::new(state.pool).list().await?;
    Ok(Json(orgs))
}
