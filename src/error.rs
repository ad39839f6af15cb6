// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict (unique constraint violation)
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<crate::services::StoreError> for ApiError {
    fn from(err: crate::services::StoreError) -> Self {
        match err {
            crate::services::StoreError::OrganizationNotFound => {
                ApiError::not_found("Organization not found")
            }
            crate::services::StoreError::UserNotFound => ApiError::not_found("User not found"),
            crate::services::StoreError::SlugTaken => {
                ApiError::conflict("Organization with this slug already exists")
            }
            crate::services::StoreError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("Database error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::database::DatabaseError> for ApiError {
    fn from(err: crate::database::DatabaseError) -> Self {
        tracing::error!("Database unavailable: {}", err);
        ApiError::service_unavailable("Database temporarily unavailable")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StoreError;

    #[test]
    fn store_errors_map_to_http_statuses() {
        assert_eq!(ApiError::from(StoreError::OrganizationNotFound).status_code(), 404);
        assert_eq!(ApiError::from(StoreError::UserNotFound).status_code(), 404);
        assert_eq!(ApiError::from(StoreError::SlugTaken).status_code(), 409);
        assert_eq!(
            ApiError::from(StoreError::Sqlx(sqlx::Error::PoolTimedOut)).status_code(),
            500
        );
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err = ApiError::from(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(err.message(), "An error occurred while processing your request");
    }

    #[test]
    fn json_body_shape() {
        let body = ApiError::conflict("Organization with this slug already exists").to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "CONFLICT");
        assert_eq!(body["message"], "Organization with this slug already exists");
    }
}
