// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User models for registration and login.

use serde::{Deserialize, Serialize};

/// Registration payload. The password is plaintext here and hashed at rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl UserDetails {
    /// All three fields must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.email.is_empty()
    }
}

/// Login payload.
///
/// When returned from the store, `password` holds the stored hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
}
