// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! Handlers only see the [`WorkoutPlanStore`] trait. [`PgStore`] backs it with
//! PostgreSQL and [`InMemoryStore`] keeps everything in process memory.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

use crate::models::{LoginData, UserDetails, WorkoutPlan};
use async_trait::async_trait;

/// Table names as constants.
pub mod tables {
    pub const USERS: &str = "users";
    pub const WORKOUT_PLAN: &str = "workout_plan";
}

/// Message carried by every not-found error.
pub const NO_ROWS: &str = "no rows in result set";

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no rows in result set: {0}")]
    NotFound(String),

    #[error("username already exists")]
    UserExists,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Password(#[from] crate::services::password::PasswordError),

    #[error("database error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound("row not found".to_string()),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Capability set the request pipeline needs from persistence.
///
/// Each call is atomic on its own. Existence checks inside
/// `update_workout_plan` and `delete_workout_plan` are separate reads, so two
/// racing mutations on the same name have no ordering guarantee.
#[async_trait]
pub trait WorkoutPlanStore: Send + Sync {
    /// Append a plan. Duplicate exercise names are allowed.
    async fn add_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError>;

    /// Remove every plan named `name`; `NotFound` if there is none.
    async fn delete_workout_plan(&self, name: &str) -> Result<(), StoreError>;

    /// Overwrite repetitions, sets and weight of the plans sharing
    /// `plan.exercise_name`; `NotFound` if there is none.
    async fn update_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError>;

    /// All plans in insertion order.
    async fn workout_plan_list(&self) -> Result<Vec<WorkoutPlan>, StoreError>;

    /// Hash the password and persist a new user; `UserExists` on duplicates.
    async fn add_user(&self, user: UserDetails) -> Result<(), StoreError>;

    /// Check credentials. On success the returned `password` is the stored hash.
    async fn user_login(&self, login: LoginData) -> Result<LoginData, StoreError>;
}
