pub mod api;
pub mod auth;
pub mod validation;

pub use api::ApiError;
pub use auth::AuthError;
pub use validation::ValidationError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::AuthError(e) => (e.status_code(), e.to_string()),
            ApiError::ValidationError(e) => (e.status_code(), e.to_string()),
            ApiError::DatabaseError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Every error is reported the same way in the body
        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
