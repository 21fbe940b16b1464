//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{jwt::AuthError, store::StoreError};

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request rejected by the rate limiter
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Collection store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Store(StoreError::MissingField(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::OutOfRange { .. }) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
