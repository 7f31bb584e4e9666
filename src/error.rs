//! Error types for the person gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failure raised by one of the backing store collaborators.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Relational store query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Cache store command or connection failure
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Store switched off (in-memory backends only)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// == Gateway Error Enum ==
/// Unified error type for the record gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No identifier segment in the request path
    #[error("ID is missing")]
    MissingIdentifier,

    /// Request body could not be decoded as a person record
    #[error("Invalid JSON format: {0}")]
    InvalidPayload(String),

    /// Cache miss or cache failure on the read path
    #[error("{0}")]
    CacheLookupFailed(String),

    /// No canonical row, or the relational query failed
    #[error("{0}")]
    RecordNotFound(String),

    /// Mirroring the canonical record into the cache failed
    #[error("{0}")]
    CacheWriteFailed(String),
}

impl GatewayError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingIdentifier | GatewayError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::CacheLookupFailed(_)
            | GatewayError::RecordNotFound(_)
            | GatewayError::CacheWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Client errors go out as plain text
            GatewayError::MissingIdentifier => (status, "ID is missing").into_response(),
            GatewayError::InvalidPayload(_) => (status, "Invalid JSON format").into_response(),
            other => (status, Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(GatewayError::MissingIdentifier.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::InvalidPayload("eof".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_errors_are_internal() {
        for err in [
            GatewayError::CacheLookupFailed("miss".to_string()),
            GatewayError::RecordNotFound("no rows".to_string()),
            GatewayError::CacheWriteFailed("down".to_string()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_missing_identifier_is_plain_text() {
        let response = GatewayError::MissingIdentifier.into_response();
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_store_error_is_json() {
        let response = GatewayError::RecordNotFound("no rows".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_unavailable_store_error_message() {
        let err = StoreError::Unavailable("cache".to_string());
        assert_eq!(err.to_string(), "store unavailable: cache");
    }
}
