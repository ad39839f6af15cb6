use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::database::models::{NewUser, User, UserPatch, UserRole};
use crate::services::{OrganizationService, StoreError};

const USER_COLUMNS: &str = "id, name, role, organization_id, created_at, updated_at";

/// Data access for the users table. Users live and die with their
/// organization; reparenting is deliberately not offered.
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Users belonging to an organization, newest first. An unknown
    /// organization yields an empty list, not an error.
    pub async fn list_by_organization(&self, org_id: i32) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE organization_id = $1 ORDER BY created_at DESC"
        ))
        .bind(org_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Insert a user under an organization. The existence check up front is
    /// intentional even though the foreign key would also reject the insert:
    /// it lets a missing organization surface as a clear NotFound instead of
    /// a constraint violation.
    pub async fn create(&self, org_id: i32, new: NewUser) -> Result<User, StoreError> {
        let orgs = OrganizationService::new(self.pool.clone());
        if !orgs.exists(org_id).await? {
            return Err(StoreError::OrganizationNotFound);
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, role, organization_id) VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(new.name)
        .bind(new.role.unwrap_or(UserRole::Coordinator))
        .bind(org_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Merge only the provided fields into the row, refreshing `updated_at`.
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<User, StoreError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = now()");

        if let Some(name) = patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(role) = patch.role {
            qb.push(", role = ").push_bind(role);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {USER_COLUMNS}"));

        let user = qb
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?;

        user.ok_or(StoreError::UserNotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let deleted: Option<(i32,)> =
            sqlx::query_as("DELETE FROM users WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(StoreError::UserNotFound),
        }
    }
}
