//! API error type with IntoResponse
//!
//! Every failure leaves the service as the same flat body:
//! `{"success": false, "error": <status>, "message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { message: String },

    /// Resource missing or required result set empty (404)
    NotFound { resource: &'static str, id: String },

    /// Wrong verb for an existing path (405)
    MethodNotAllowed,

    /// Request input failed validation (422)
    Validation(ValidationError),

    /// Store rejected a write (422, logged)
    Rejected(DbError),

    /// Store fault on a read path (500, logged)
    Database(DbError),

    /// Anything else (500, logged)
    Internal { message: String },
}

/// Uniform error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Treat a store failure on a write as an unprocessable request.
    pub fn rejected(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Rejected(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) | Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::BadRequest { message } => format!("bad request: {}", message),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => "method not allowed".to_owned(),
            Self::Validation(e) => format!("unprocessable: {}", e),
            Self::Rejected(e) => {
                // Log the actual error, return generic message
                tracing::warn!("Store rejected write: {}", e);
                "unprocessable: the question could not be stored".to_owned()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                "internal server error".to_owned()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                "internal server error".to_owned()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404_with_uniform_body() {
        let (status, body) = body_json(ApiError::not_found("question", 12)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "question '12' not found");
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::from(ValidationError::Missing { field: "answer" });
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
    }

    #[tokio::test]
    async fn method_not_allowed_has_full_body() {
        let (status, body) = body_json(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], 405);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
    }

    #[test]
    fn store_not_found_stays_404() {
        let err = ApiError::rejected(DbError::NotFound {
            resource: "question",
            id: "5".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::rejected(DbError::Sqlx(sqlx::Error::RowNotFound));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
