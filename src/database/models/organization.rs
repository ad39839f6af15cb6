use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Organization status as stored in the `status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
    Active,
    Blocked,
    Inactive,
}

impl Default for OrgStatus {
    fn default() -> Self {
        OrgStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub avatar: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: OrgStatus,
    pub pending_requests: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new organization. `status` and `pending_requests` fall back
/// to the store defaults (active, 0) when not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub name: String,
    pub slug: String,
    pub email: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: Option<OrgStatus>,
    pub pending_requests: Option<i32>,
}

/// Partial update: `None` fields are left untouched in the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub status: Option<OrgStatus>,
    pub pending_requests: Option<i32>,
}
