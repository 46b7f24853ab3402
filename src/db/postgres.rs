// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PostgreSQL store backed by a sqlx connection pool.
//!
//! Mutations check for the target row first and then issue a single
//! statement. The two calls are not wrapped in a transaction.

use super::{StoreError, WorkoutPlanStore};
use crate::config::Config;
use crate::models::{LoginData, UserDetails, WorkoutPlan};
use crate::services::password::{hash_password, verify_password};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 10;

/// Postgres error code for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS workout_plan (
        id SERIAL PRIMARY KEY,
        exercise_name TEXT NOT NULL,
        repetitions INTEGER NOT NULL,
        sets INTEGER NOT NULL,
        weights INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        email TEXT NOT NULL
    )",
];

#[derive(sqlx::FromRow)]
struct PlanRow {
    exercise_name: String,
    repetitions: i32,
    sets: i32,
    weights: i32,
}

impl From<PlanRow> for WorkoutPlan {
    fn from(row: PlanRow) -> Self {
        WorkoutPlan {
            exercise_name: row.exercise_name,
            repetitions: row.repetitions,
            sets: row.sets,
            weight: row.weights,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
}

/// PostgreSQL database client.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect using the database settings from `config`.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name)
            .ssl_mode(PgSslMode::Disable);

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Postgres: {}", e)))?;

        tracing::info!(
            host = %config.db_host,
            database = %config.db_name,
            "Connected to Postgres"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn plan_exists(&self, name: &str) -> Result<(), StoreError> {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT exercise_name FROM workout_plan WHERE exercise_name = $1 LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        found
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("workout plan {:?}", name)))
    }
}

#[async_trait]
impl WorkoutPlanStore for PgStore {
    async fn add_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO workout_plan (exercise_name, repetitions, sets, weights) VALUES ($1, $2, $3, $4)",
        )
        .bind(&plan.exercise_name)
        .bind(plan.repetitions)
        .bind(plan.sets)
        .bind(plan.weight)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_workout_plan(&self, name: &str) -> Result<(), StoreError> {
        self.plan_exists(name).await?;

        sqlx::query("DELETE FROM workout_plan WHERE exercise_name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError> {
        self.plan_exists(&plan.exercise_name).await?;

        sqlx::query(
            "UPDATE workout_plan SET repetitions = $1, sets = $2, weights = $3 WHERE exercise_name = $4",
        )
        .bind(plan.repetitions)
        .bind(plan.sets)
        .bind(plan.weight)
        .bind(&plan.exercise_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn workout_plan_list(&self) -> Result<Vec<WorkoutPlan>, StoreError> {
        let rows: Vec<PlanRow> = sqlx::query_as(
            "SELECT exercise_name, repetitions, sets, weights FROM workout_plan ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkoutPlan::from).collect())
    }

    async fn add_user(&self, user: UserDetails) -> Result<(), StoreError> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT username FROM users WHERE username = $1")
                .bind(&user.username)
                .fetch_optional(&self.pool)
                .await?;
        if existing.is_some() {
            return Err(StoreError::UserExists);
        }

        let password_hash = hash_password(&user.password)?;

        sqlx::query("INSERT INTO users (username, password_hash, email) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&password_hash)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    StoreError::UserExists
                }
                _ => StoreError::from(e),
            })?;

        tracing::info!(username = %user.username, "User registered");
        Ok(())
    }

    async fn user_login(&self, login: LoginData) -> Result<LoginData, StoreError> {
        let row: UserRow =
            sqlx::query_as("SELECT username, password_hash FROM users WHERE username = $1")
                .bind(&login.username)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| StoreError::NotFound(format!("user {:?}", login.username)))?;

        if !verify_password(&login.password, &row.password_hash)? {
            return Err(StoreError::InvalidCredentials);
        }

        Ok(LoginData {
            username: row.username,
            password: row.password_hash,
        })
    }
}
