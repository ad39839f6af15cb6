// handlers/organizations/show.rs - GET /api/organizations/:id handler

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::Organization;
use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::OrganizationService;

pub async fn organization_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Organization>, ApiError> {
    let id = parse_id(&id, "organization")?;
    let org = OrganizationService::new(state.pool).get(id).await?;
    Ok(Json(org))
}
