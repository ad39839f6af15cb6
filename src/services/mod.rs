pub mod organization_service;
pub mod user_service;

pub use organization_service::OrganizationService;
pub use user_service::UserService;

use thiserror::Error;

/// Outcomes from the data-access layer that handlers map to HTTP statuses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Organization not found")]
    OrganizationNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Organization with this slug already exists")]
    SlugTaken,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Postgres unique_violation, raised by the unique index on organizations.slug
const UNIQUE_VIOLATION: &str = "23505";

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}
