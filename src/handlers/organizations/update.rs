// handlers/organizations/update.rs - PUT /api/organizations/:id handler

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::{Organization, OrganizationPatch};
use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::OrganizationService;

/// Partial update: fields absent from the body are left unchanged,
/// `updatedAt` is always refreshed.
pub async fn organization_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OrganizationPatch>,
) -> Result<Json<Organization>, ApiError> {
    let id = parse_id(&id, "organization")?;
    let updated = OrganizationService::new(state.pool).update(id, patch).await?;
    Ok(Json(updated))
}
