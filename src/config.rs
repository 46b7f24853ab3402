// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::str::FromStr;

/// Which [`crate::db::WorkoutPlanStore`] implementation to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::Invalid("STORE_BACKEND", other.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Database ---
    pub db_user: String,
    pub db_name: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub store_backend: StoreBackend,

    /// Server port
    pub port: u16,

    /// JWT signing key for session tokens (raw bytes)
    pub jwt_key: Vec<u8>,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            db_user: "tracker".to_string(),
            db_name: "tracker".to_string(),
            db_password: String::new(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            store_backend: StoreBackend::Memory,
            port: 8080,
            jwt_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::Postgres,
        };

        // Database credentials only matter for the postgres backend
        let required_for_db = |name: &'static str| match env::var(name) {
            Ok(value) => Ok(value),
            Err(_) if store_backend == StoreBackend::Memory => Ok(String::new()),
            Err(_) => Err(ConfigError::Missing(name)),
        };

        Ok(Self {
            db_user: required_for_db("DB_USER")?,
            db_name: required_for_db("DB_NAME")?,
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: parse_or("DB_PORT", 5432)?,
            store_backend,
            port: parse_or("PORT", 8080)?,
            jwt_key: env::var("JWT_KEY")
                .map_err(|_| ConfigError::Missing("JWT_KEY"))?
                .into_bytes(),
        })
    }
}

fn parse_or(name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, value)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything that mutates
    // them lives in this single test.
    #[test]
    fn test_config_from_env() {
        env::set_var("DB_USER", "khel");
        env::set_var("DB_NAME", "workouts");
        env::set_var("JWT_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::remove_var("STORE_BACKEND");
        env::remove_var("PORT");
        env::remove_var("DB_PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.db_user, "khel");
        assert_eq!(config.db_name, "workouts");
        assert_eq!(config.jwt_key, b"test_jwt_key_32_bytes_minimum!!".to_vec());
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_port, 5432);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));
        env::remove_var("PORT");

        env::remove_var("JWT_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("JWT_KEY"))
        ));
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(
            " Postgres ".parse::<StoreBackend>().unwrap(),
            StoreBackend::Postgres
        );
        assert!("redis".parse::<StoreBackend>().is_err());
    }
}
