// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;
use workout_tracker::config::Config;
use workout_tracker::db::{InMemoryStore, WorkoutPlanStore};
use workout_tracker::routes::create_router;
use workout_tracker::AppState;

/// Check if a test database is configured via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("TEST_DATABASE").is_ok()
}

/// Skip test with message if no database is configured.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: TEST_DATABASE not set");
            return;
        }
    };
}

/// Create a test app over a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(InMemoryStore::new()))
}

/// Create a test app over the given store.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<dyn WorkoutPlanStore>) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), store));
    (create_router(state.clone()), state)
}

/// Issue a valid token through the app's own token authority.
#[allow(dead_code)]
pub fn create_test_jwt(state: &AppState, username: &str) -> String {
    state.tokens.issue(username).expect("Failed to create JWT")
}

/// Send a request, optionally with a bearer token and JSON body.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Read the full response body as a string.
#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as JSON.
#[allow(dead_code)]
pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register and log in, returning the issued token.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let register = format!(
        r#"{{"username": "{}", "password": "{}", "email": "{}@example.com"}}"#,
        username, password, username
    );
    let response = send(app, "POST", "/auth/register", None, Some(&register)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let login = format!(
        r#"{{"username": "{}", "password": "{}"}}"#,
        username, password
    );
    let response = send(app, "POST", "/auth/login", None, Some(&login)).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let token: workout_tracker::models::Token = body_json(response).await;
    token.token
}
