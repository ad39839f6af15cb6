// handlers/organizations/create.rs - POST /api/organizations handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::database::models::{NewOrganization, OrgStatus, Organization};
use crate::error::ApiError;
use crate::handlers::{non_empty, AppState};
use crate::services::OrganizationService;

/// Create body. Required fields are Options so a missing field becomes a
/// 400 with a clear message rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: Option<OrgStatus>,
    pub pending_requests: Option<i32>,
}

pub async fn organization_create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), ApiError> {
    let (Some(name), Some(slug), Some(email)) = (
        non_empty(body.name),
        non_empty(body.slug),
        non_empty(body.email),
    ) else {
        return Err(ApiError::bad_request("Name, slug, and email are required"));
    };

    let created = OrganizationService::new(state.pool)
        .create(NewOrganization {
            name,
            slug,
            email,
            avatar: body.avatar,
            phone: body.phone,
            website: body.website,
            status: body.status,
            pending_requests: body.pending_requests,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
