// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod user;
pub mod workout;

pub use user::{LoginData, Token, UserDetails};
pub use workout::WorkoutPlan;
