//! Application configuration: where to listen and which database to use.
//!
//! Settings are layered. Defaults come first, then an optional TOML file
//! (`RECIPIST_CONFIG`, or `./config.toml` when it exists), then environment
//! variables, which always win. The `.env` file is loaded by `main` before this
//! runs, so its values count as environment variables.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/recipist.sqlite?mode=rwc";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Runtime configuration for the HTTP server and its database
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Socket address the server binds to
    pub listen_addr: String,
    /// `SeaORM` connection URL (`sqlite://...` or `postgres://...`)
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// `DATABASE_URL` wins outright. Otherwise, if `DB_HOST` is set, a Postgres URL
    /// is composed from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, and `DB_NAME`.
    /// `APP_ADDR` replaces the listen address; `APP_PORT` alone keeps the host and
    /// swaps the port.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        } else if let Some(host) = lookup("DB_HOST") {
            let port = lookup("DB_PORT").unwrap_or_else(|| "5432".to_string());
            let user = lookup("DB_USER").unwrap_or_default();
            let password = lookup("DB_PASSWORD").unwrap_or_default();
            let name = lookup("DB_NAME").unwrap_or_default();
            self.database_url = format!("postgres://{user}:{password}@{host}:{port}/{name}");
        }

        if let Some(addr) = lookup("APP_ADDR") {
            self.listen_addr = addr;
        } else if let Some(port) = lookup("APP_PORT") {
            let host = self
                .listen_addr
                .rsplit_once(':')
                .map_or("0.0.0.0", |(host, _)| host);
            // Accept both "8080" and the ":8080" form
            self.listen_addr = format!("{host}:{}", port.trim_start_matches(':'));
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Builds the effective configuration: defaults, then config file, then environment.
///
/// An explicit `RECIPIST_CONFIG` path must exist; the default `config.toml` is optional.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = match std::env::var("RECIPIST_CONFIG") {
        Ok(path) => load_config(path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        Err(_) => AppConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok());
    info!(listen_addr = %config.listen_addr, "Configuration loaded");
    Ok(config)
}
