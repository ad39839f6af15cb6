// handlers/organizations/delete.rs - DELETE /api/organizations/:id handler

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::{parse_id, AppState};
use crate::services::OrganizationService;

/// Delete an organization. The store cascades to its users.
pub async fn organization_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "organization")?;
    OrganizationService::new(state.pool).delete(id).await?;

    Ok(Json(json!({
        "message": "Organization deleted successfully",
        "id": id
    })))
}
