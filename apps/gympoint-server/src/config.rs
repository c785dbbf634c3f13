//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present or startup
//! aborts with a clear message.

use std::env;
use thiserror::Error;

/// Error raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is present but unparsable.
    #[error("Invalid value for {name}: {value}")]
    Invalid {
        /// The variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,

    /// TCP port to listen on. Default 8080.
    pub port: u16,

    /// PEM-encoded RSA private key for signing access tokens.
    pub jwt_private_key: String,

    /// PEM-encoded RSA public key for validating access tokens.
    pub jwt_public_key: String,

    /// The `iss` claim stamped on tokens. Default "gympoint".
    pub jwt_issuer: String,

    /// Log filter directive. Default "info".
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_private_key = require("JWT_PRIVATE_KEY")?;
        let jwt_public_key = require("JWT_PUBLIC_KEY")?;

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => 8080,
        };

        let jwt_issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "gympoint".to_string());
        let log_filter = env::var("LOG_FILTER").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            port,
            jwt_private_key,
            jwt_public_key,
            jwt_issuer,
            log_filter,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_named_in_the_error() {
        let err = ConfigError::Missing("DATABASE_URL");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DATABASE_URL"
        );
    }

    #[test]
    fn invalid_port_is_reported_with_its_value() {
        let err = ConfigError::Invalid {
            name: "PORT",
            value: "eighty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for PORT: eighty");
    }
}
