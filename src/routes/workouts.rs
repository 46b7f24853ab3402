// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout plan routes. All of them sit behind the auth middleware.
//!
//! Update and delete report a missing target as a 500 carrying the store's
//! "no rows" message. Create does not check for duplicate exercise names.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::WorkoutPlan;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Workout plan routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/workout-plans/",
            post(create_workout_plan).put(update_workout_plan),
        )
        .route("/workout-plans/{*name}", delete(delete_workout_plan))
        .route("/workouts", get(list_workout_plans))
}

/// Decode a plan body leniently.
///
/// Malformed JSON is logged and replaced by a zero-valued plan so the request
/// still reaches the store.
fn decode_plan(body: &[u8]) -> WorkoutPlan {
    if body.is_empty() {
        return WorkoutPlan::default();
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Error decoding workout plan JSON");
        WorkoutPlan::default()
    })
}

async fn create_workout_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<StatusCode> {
    let plan = decode_plan(&body);
    let exercise_name = plan.exercise_name.clone();

    state
        .store
        .add_workout_plan(plan)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    tracing::info!(
        username = %user.username,
        exercise_name = %exercise_name,
        "Workout plan created"
    );
    Ok(StatusCode::CREATED)
}

async fn update_workout_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<StatusCode> {
    let plan = decode_plan(&body);
    let exercise_name = plan.exercise_name.clone();

    state
        .store
        .update_workout_plan(plan)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    tracing::info!(
        username = %user.username,
        exercise_name = %exercise_name,
        "Workout plan updated"
    );
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_workout_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<StatusCode> {
    state
        .store
        .delete_workout_plan(&name)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    tracing::info!(
        username = %user.username,
        exercise_name = %name,
        "Workout plan deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// List every plan in store order.
async fn list_workout_plans(State(state): State<Arc<AppState>>) -> Result<Json<Vec<WorkoutPlan>>> {
    let plans = state
        .store
        .workout_plan_list()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(plans))
}
