//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid host/port combination: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session cookie name must be a non-empty cookie token")]
    InvalidCookieName,

    #[error("Session idle timeout must be between 1 second and 30 days")]
    InvalidIdleTimeout,

    #[error("Session sweep interval must be greater than zero")]
    InvalidSweepInterval,
}
