//! API error type with IntoResponse
//!
//! Only two shapes ever reach clients:
//! `{success:false, error:404, message:"resource not found"}` and
//! `{success:false, error:422, message:"unprocessable"}`.
//! The detail is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::QuizError;

use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource, page or route absent (404)
    NotFound { resource: &'static str, id: String },

    /// Malformed or incomplete request (422)
    Unprocessable { reason: String },

    /// Store failure of any kind (422, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } | Self::Store(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Not found");
                "resource not found"
            }
            Self::Unprocessable { reason } => {
                tracing::warn!(reason = %reason, "Unprocessable request");
                "unprocessable"
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                "unprocessable"
            }
        };

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("question", 9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let response = ApiError::unprocessable("missing quiz_category").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": 422, "message": "unprocessable"})
        );
    }

    #[tokio::test]
    async fn store_errors_collapse_to_422() {
        let err = ApiError::from(StoreError::NotNull { column: "answer" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["message"], "unprocessable");
    }

    #[test]
    fn quiz_error_is_unprocessable() {
        let err = ApiError::from(QuizError::MissingCategoryId { kind: "Art".into() });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
