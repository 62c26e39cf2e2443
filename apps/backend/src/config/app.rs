//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so an empty environment yields a usable
//! configuration. Values that are present but malformed are rejected.

use std::env;

use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub workers: usize,

    // Shutdown grace period for in-flight requests
    pub shutdown_timeout_secs: u64,

    // CORS
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
            None => DEFAULT_PORT,
        };

        let workers = match lookup("BACKEND_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "BACKEND_WORKERS must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => num_cpus::get(),
        };

        let shutdown_timeout_secs = match lookup("BACKEND_SHUTDOWN_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_SHUTDOWN_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            None => DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        };

        let cors_allowed_origins =
            parse_allowed_origins(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Config {
            host,
            port,
            workers,
            shutdown_timeout_secs,
            cors_allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
