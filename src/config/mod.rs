/// Listener and database settings from config.toml and the environment
pub mod app;

/// Database configuration and connection management
pub mod database;
