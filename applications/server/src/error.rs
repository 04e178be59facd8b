/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use usuario_core::UsuarioError;
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, ServerError>;

pub const USER_ALREADY_EXISTS: &str = "user already exists";
pub const USER_NOT_FOUND: &str = "user not found";
pub const INVALID_ID: &str = "id must be an integer";

/// Error payload returned by every failing route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "user already exists")]
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn conflict() -> Self {
        Self::Conflict(USER_ALREADY_EXISTS.to_string())
    }

    pub fn not_found() -> Self {
        Self::NotFound(USER_NOT_FOUND.to_string())
    }

    pub fn invalid_id() -> Self {
        Self::BadRequest(INVALID_ID.to_string())
    }
}

impl From<UsuarioError> for ServerError {
    fn from(err: UsuarioError) -> Self {
        match err {
            UsuarioError::DuplicateKey(_) => ServerError::conflict(),
            other => ServerError::Storage(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ServerError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn duplicate_key_maps_to_bad_request() {
        let response = ServerError::from(UsuarioError::DuplicateKey(1)).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "user already exists" })
        );
    }

    #[tokio::test]
    async fn storage_errors_expose_the_raw_message() {
        let err = UsuarioError::Database("disk I/O error".to_string());
        let response = ServerError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "disk I/O error" })
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = ServerError::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "user not found" })
        );
    }

    #[tokio::test]
    async fn invalid_id_maps_to_bad_request() {
        let response = ServerError::invalid_id().into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "id must be an integer" })
        );
    }

    #[tokio::test]
    async fn config_errors_are_masked() {
        let response = ServerError::Config("secret detail".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "Configuration error" })
        );
    }
}
