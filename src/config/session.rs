//! Session cookie and lifecycle configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted idle timeout: 30 days.
pub const MAX_IDLE_TIMEOUT_SECS: u64 = 30 * 24 * 60 * 60;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Seconds of inactivity before a session is discarded
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Seconds between sweeps of expired sessions
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_cookie_token(&self.cookie_name) {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.idle_timeout_secs == 0 || self.idle_timeout_secs > MAX_IDLE_TIMEOUT_SECS {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_secs: default_idle_timeout(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// RFC 6265 cookie-name token: visible ASCII minus separators.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
        })
}

fn default_cookie_name() -> String {
    "todo_lists_session".to_string()
}

fn default_idle_timeout() -> u64 {
    24 * 60 * 60
}

fn default_sweep_interval() -> u64 {
    300
}
