// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration and login routes.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::db::StoreError;
use crate::error::{AppError, Result};
use crate::models::{LoginData, Token, UserDetails};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Decode a JSON body, rejecting malformed input.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Register a new user.
async fn register(State(state): State<Arc<AppState>>, body: Bytes) -> Result<StatusCode> {
    let user_details: UserDetails = decode_body(&body)?;

    if !user_details.is_complete() {
        return Err(AppError::InvalidUserDetails);
    }

    let username = user_details.username.clone();
    state
        .store
        .add_user(user_details)
        .await
        .map_err(|e| match e {
            StoreError::UserExists => AppError::UserNameExists,
            other => AppError::Database(other.to_string()),
        })?;

    tracing::info!(username = %username, "Registered user");
    Ok(StatusCode::CREATED)
}

/// Check credentials and issue a session token.
async fn login(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Token>> {
    let login_data: LoginData = decode_body(&body)?;

    let user = state
        .store
        .user_login(login_data)
        .await
        .map_err(|e| match e {
            StoreError::InvalidCredentials => AppError::InvalidLoginDetails,
            not_found @ StoreError::NotFound(_) => {
                tracing::debug!(error = %not_found, "Login for unknown user");
                AppError::BadRequest(not_found.to_string())
            }
            other => {
                tracing::warn!(error = %other, "Login lookup failed");
                AppError::BadRequest(other.to_string())
            }
        })?;

    let token = state.tokens.issue(&user.username).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AppError::TokenGeneration
    })?;

    tracing::info!(username = %user.username, "User logged in");
    Ok(Json(Token { token }))
}
