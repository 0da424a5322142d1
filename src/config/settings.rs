//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SIGN_IN_DELAY_MS, DEFAULT_SIGN_UP_DELAY_MS,
    DEFAULT_SUCCESS_DISPLAY_MS,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Simulated sign-in backend delay (milliseconds)
    pub sign_in_delay_ms: u64,
    /// Simulated sign-up backend delay (milliseconds)
    pub sign_up_delay_ms: u64,
    /// Success display duration before the flow resets (milliseconds)
    pub success_display_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            sign_in_delay_ms: env::var("SIGN_IN_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SIGN_IN_DELAY_MS),
            sign_up_delay_ms: env::var("SIGN_UP_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SIGN_UP_DELAY_MS),
            success_display_ms: env::var("SUCCESS_DISPLAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SUCCESS_DISPLAY_MS),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Simulated sign-in delay as a `Duration`.
    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    /// Simulated sign-up delay as a `Duration`.
    pub fn sign_up_delay(&self) -> Duration {
        Duration::from_millis(self.sign_up_delay_ms)
    }

    /// Success display duration as a `Duration`.
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
            sign_up_delay_ms: DEFAULT_SIGN_UP_DELAY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
        }
    }
}
