//! Environment-driven server configuration.
//!
//! DESIGN
//! ======
//! `ServerConfig::from_env` reads the process environment (after `.env` is
//! loaded by `main`). Parsing goes through `from_lookup` so tests can feed a
//! map instead of mutating process-wide variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_DIR: &str = "site";
const DEV_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SESSION_SECRET is required (set ALLOW_DEV_SECRET=true for local development)")]
    MissingSecret,
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub session_secret: String,
    /// True when `session_secret` is the built-in development value.
    pub dev_secret: bool,
    pub site_dir: PathBuf,
    pub handbook_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number, or if
    /// `SESSION_SECRET` is unset and the development secret is not allowed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let (session_secret, dev_secret) = match lookup("SESSION_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => (secret, false),
            None if lookup("ALLOW_DEV_SECRET").as_deref().and_then(parse_bool).unwrap_or(false) => {
                (DEV_SESSION_SECRET.to_owned(), true)
            }
            None => return Err(ConfigError::MissingSecret),
        };

        let site_dir = lookup("SITE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        let handbook_path = lookup("HANDBOOK_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, session_secret, dev_secret, site_dir, handbook_path })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
