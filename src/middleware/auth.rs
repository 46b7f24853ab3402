// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication middleware.

use crate::error::AppError;
use crate::services::token::TokenError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user extracted from JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

/// Pull the token out of an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: two space-separated parts with
/// the literal scheme first.
pub fn bearer_token(header_value: &str) -> Result<&str, AppError> {
    let parts: Vec<&str> = header_value.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] => Ok(*token),
        _ => Err(AppError::InvalidToken),
    }
}

/// Middleware that requires valid JWT authentication.
///
/// The token is trusted once its signature and expiry check out; the store is
/// not consulted.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    let token = bearer_token(auth_header)?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        match e {
            TokenError::Expired => AppError::InvalidOrExpiredToken,
            TokenError::Claims => AppError::InvalidTokenClaims,
            TokenError::Invalid | TokenError::Signing(_) => AppError::InvalidToken,
        }
    })?;

    let auth_user = AuthUser {
        username: claims.username,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_accepts_exact_form() {
        assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_rejects_malformed_headers() {
        for value in [
            "",
            "dummy",
            "Bearer",
            "bearer abc",
            "Basic abc",
            "Bearer abc def",
            " Bearer abc",
        ] {
            assert!(
                matches!(bearer_token(value), Err(AppError::InvalidToken)),
                "{:?} should be rejected",
                value
            );
        }
    }
}
