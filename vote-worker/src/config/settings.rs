//! Process configuration, read once at startup.
//! Every setting has a default so the worker starts with an empty
//! environment; only a malformed value is an error.
use std::env;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Represents errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Connection parameters for the queue and the store.
///
/// | variable            | default             |
/// |---------------------|---------------------|
/// | `REDIS_HOST`        | `redis`             |
/// | `REDIS_PORT`        | `6379`              |
/// | `REDIS_PASSWORD`    | `redis_password`    |
/// | `POSTGRES_HOST`     | `db`                |
/// | `POSTGRES_PORT`     | `5432`              |
/// | `POSTGRES_DATABASE` | `postgres`          |
/// | `POSTGRES_USER`     | `postgres_user`     |
/// | `POSTGRES_PASSWORD` | `postgres_password` |
#[derive(Debug, Clone)]
pub struct Settings {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: String,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_database: String,
    pub postgres_user: String,
    pub postgres_password: String,
}

impl Settings {
    /// Reads all settings from the environment, applying defaults.
    ///
    /// # Returns
    ///
    /// A `Result` with the populated `Settings` or a `ConfigError` if a
    /// value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            redis_host: var_or("REDIS_HOST", "redis"),
            redis_port: port_var("REDIS_PORT", 6379)?,
            redis_password: var_or("REDIS_PASSWORD", "redis_password"),
            postgres_host: var_or("POSTGRES_HOST", "db"),
            postgres_port: port_var("POSTGRES_PORT", 5432)?,
            postgres_database: var_or("POSTGRES_DATABASE", "postgres"),
            postgres_user: var_or("POSTGRES_USER", "postgres_user"),
            postgres_password: var_or("POSTGRES_PASSWORD", "postgres_password"),
        })
    }

    /// Connection URL for the queue client.
    pub fn redis_url(&self) -> String {
        format!(
            "redis://:{}@{}:{}/",
            self.redis_password, self.redis_host, self.redis_port
        )
    }

    /// Typed connection options for the store.
    pub fn postgres_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.postgres_host)
            .port(self.postgres_port)
            .database(&self.postgres_database)
            .username(&self.postgres_user)
            .password(&self.postgres_password)
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn port_var(name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
