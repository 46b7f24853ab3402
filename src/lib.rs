// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker: a token-gated API for a personal list of workout plans.
//!
//! This crate provides registration and login, and CRUD over workout plans
//! for holders of a valid session token.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::WorkoutPlanStore;
use services::TokenAuthority;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn WorkoutPlanStore>,
    pub tokens: TokenAuthority,
}

impl AppState {
    /// Build state with a token authority keyed from `config.jwt_key`.
    pub fn new(config: Config, store: Arc<dyn WorkoutPlanStore>) -> Self {
        let tokens = TokenAuthority::new(&config.jwt_key);
        Self {
            config,
            store,
            tokens,
        }
    }
}
