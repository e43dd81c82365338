//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TODO_LISTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use todo_lists::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod server;
mod session;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session cookie and expiry configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TODO_LISTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TODO_LISTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TODO_LISTS__SESSION__IDLE_TIMEOUT_SECS=3600` -> `session.idle_timeout_secs = 3600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TODO_LISTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TODO_LISTS__SERVER__PORT");
        env::remove_var("TODO_LISTS__SERVER__ENVIRONMENT");
        env::remove_var("TODO_LISTS__SESSION__COOKIE_NAME");
        env::remove_var("TODO_LISTS__SESSION__IDLE_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.session.cookie_name, "todo_lists_session");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TODO_LISTS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TODO_LISTS__SERVER__PORT", "3000");
        env::set_var("TODO_LISTS__SESSION__COOKIE_NAME", "sid");
        env::set_var("TODO_LISTS__SESSION__IDLE_TIMEOUT_SECS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.cookie_name, "sid");
        assert_eq!(config.session.idle_timeout_secs, 600);
    }

    #[test]
    fn test_validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.session.idle_timeout_secs = 0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidIdleTimeout)
        );
    }
}
