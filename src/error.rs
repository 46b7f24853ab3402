// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every failure is rendered as the same JSON envelope:
//! `{"Code": <status>, "ErrorMessage": "<category>: <detail>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid user details")]
    InvalidUserDetails,

    #[error("username already exists")]
    UserNameExists,

    #[error("invalid username or password")]
    InvalidLoginDetails,

    #[error("could not generate token")]
    TokenGeneration,

    #[error("invalid input token")]
    InvalidToken,

    #[error("invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("invalid token claims")]
    InvalidTokenClaims,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

/// Envelope categories, used as the message prefix.
pub mod category {
    pub const INTERNAL: &str = "Internal Server Error";
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const DATABASE: &str = "Database Error";
}

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "Code")]
    pub code: u16,
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
}

impl AppError {
    /// HTTP status and envelope category for this error.
    pub fn status_and_category(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidUserDetails
            | AppError::UserNameExists
            | AppError::InvalidLoginDetails
            | AppError::TokenGeneration
            | AppError::InvalidToken
            | AppError::InvalidOrExpiredToken
            | AppError::InvalidTokenClaims
            | AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, category::BAD_REQUEST),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, category::DATABASE),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, category::INTERNAL),
        }
    }

    /// Build the envelope written for this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        let (status, category) = self.status_and_category();
        ErrorEnvelope {
            code: status.as_u16(),
            error_message: format!("{}: {}", category, self),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_category();

        match &self {
            AppError::Database(msg) => tracing::error!(error = %msg, "Database error"),
            AppError::Internal(err) => tracing::error!(error = %err, "Internal server error"),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        (status, Json(self.envelope())).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_envelope() {
        let envelope = AppError::InvalidToken.envelope();
        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.error_message, "Bad Request: invalid input token");
    }

    #[test]
    fn test_internal_envelope_wraps_source() {
        let err = AppError::Internal(anyhow::anyhow!("no rows in result set"));
        let envelope = err.envelope();
        assert_eq!(envelope.code, 500);
        assert_eq!(
            envelope.error_message,
            "Internal Server Error: no rows in result set"
        );
    }

    #[test]
    fn test_envelope_field_names() {
        let json = serde_json::to_value(AppError::Database("down".into()).envelope()).unwrap();
        assert_eq!(json["Code"], 500);
        assert_eq!(json["ErrorMessage"], "Database Error: down");
    }
}
