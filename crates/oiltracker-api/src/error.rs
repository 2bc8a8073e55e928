//! Handler error type.
//!
//! Internal failures are logged in full; the client only sees a generic
//! `{"detail": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use oiltracker_types::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No seed account matches the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, *m),
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, *m),
            ApiError::Internal(e) => {
                error!(error = %e, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_is_401() {
        let resp = ApiError::InvalidCredentials.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn client_errors_keep_their_message() {
        assert_eq!(
            ApiError::NotFound("No data for grade").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("Invalid channel payload").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_is_500() {
        let resp = ApiError::from(anyhow::anyhow!("chat lock poisoned")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
