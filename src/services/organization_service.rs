use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::database::models::{NewOrganization, OrgStatus, Organization, OrganizationPatch};
use crate::services::{is_unique_violation, StoreError};

const ORGANIZATION_COLUMNS: &str =
    "id, name, slug, avatar, email, phone, website, status, pending_requests, created_at, updated_at";

/// Data access for the organizations table. Each method is a single
/// parameterized query; consistency beyond that (slug uniqueness, cascade
/// delete of users) belongs to the store.
pub struct OrganizationService {
    pool: PgPool,
}

impl OrganizationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All organizations, newest first.
    pub async fn list(&self) -> Result<Vec<Organization>, StoreError> {
        let orgs = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {ORGANIZATION_COLUMNS} FROM organizations ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(orgs)
    }

    pub async fn get(&self, id: i32) -> Result<Organization, StoreError> {
        let org = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        org.ok_or(StoreError::OrganizationNotFound)
    }

    /// Insert a new organization. Unspecified status and pending_requests
    /// fall back to active / 0.
    pub async fn create(&self, new: NewOrganization) -> Result<Organization, StoreError> {
        let result = sqlx::query_as::<_, Organization>(&format!(
            "INSERT INTO organizations (name, slug, email, avatar, phone, website, status, pending_requests) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ORGANIZATION_COLUMNS}"
        ))
        .bind(new.name)
        .bind(new.slug)
        .bind(new.email)
        .bind(new.avatar)
        .bind(new.phone)
        .bind(new.website)
        .bind(new.status.unwrap_or(OrgStatus::Active))
        .bind(new.pending_requests.unwrap_or(0))
        .fetch_one(&self.pool)
        .await;

        result.map_err(|err| {
            if is_unique_violation(&err) {
                StoreError::SlugTaken
            } else {
                err.into()
            }
        })
    }

    /// Merge only the provided fields into the row. `updated_at` is always
    /// refreshed, even for an empty patch.
    pub async fn update(
        &self,
        id: i32,
        patch: OrganizationPatch,
    ) -> Result<Organization, StoreError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE organizations SET updated_at = now()");

        if let Some(name) = patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(slug) = patch.slug {
            qb.push(", slug = ").push_bind(slug);
        }
        if let Some(email) = patch.email {
            qb.push(", email = ").push_bind(email);
        }
        if let Some(avatar) = patch.avatar {
            qb.push(", avatar = ").push_bind(avatar);
        }
        if let Some(phone) = patch.phone {
            qb.push(", phone = ").push_bind(phone);
        }
        if let Some(website) = patch.website {
            qb.push(", website = ").push_bind(website);
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(pending) = patch.pending_requests {
            qb.push(", pending_requests = ").push_bind(pending);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {ORGANIZATION_COLUMNS}"));

        let result = qb
            .build_query_as::<Organization>()
            .fetch_optional(&self.pool)
            .await;

        match result {
            Ok(Some(org)) => Ok(org),
            Ok(None) => Err(StoreError::OrganizationNotFound),
            Err(err) if is_unique_violation(&err) => Err(StoreError::SlugTaken),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete an organization. The cascade on users.organization_id removes
    /// its users in the same statement.
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let deleted: Option<(i32,)> =
            sqlx::query_as("DELETE FROM organizations WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(StoreError::OrganizationNotFound),
        }
    }

    pub async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM organizations WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }
}
