use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

// Errors surfaced by the todo handlers, mapped onto the HTTP boundary.
// Validation is checked before the store is touched; a missing row is a 404
// with a message naming the id; storage failures pass through as 500s.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Todo with id {0} not found")]
    NotFound(i64),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "fail"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "fail"),
            ApiError::Storage(err) => {
                tracing::error!("storage error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "error")
            }
        };

        let error_response = json!({
            "status": label,
            "message": self.to_string(),
        });
        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let message = ApiError::NotFound(99999).to_string();
        assert!(message.contains("99999"));
        assert!(message.to_lowercase().contains("not found"));
    }

    #[test]
    fn storage_errors_map_to_500() {
        let response = ApiError::Storage(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_map_to_400() {
        let response = ApiError::Validation("title must not be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
