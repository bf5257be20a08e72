//! Runtime configuration read from environment variables.
//!
//! | Variable | Default |
//! | --- | --- |
//! | `TASKBOARD_BIND_ADDR` | `127.0.0.1:3000` |
//! | `DATABASE_URL` | unset: in-memory storage |
//! | `TASKBOARD_STATUSES` | `todo,doing,done` |
//! | `TASKBOARD_DEFAULT_STATUS` | first catalog entry |
//! | `TASKBOARD_DONE_STATUS` | `done` |
//! | `TASKBOARD_LOG` | `RUST_LOG`, then `info` |

use crate::task::domain::{StatusCatalog, StatusCatalogError};
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATUSES: &str = "todo,doing,done";
const DEFAULT_DONE_STATUS: &str = "done";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The bind address is not a socket address.
    #[error("invalid TASKBOARD_BIND_ADDR '{value}': {reason}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The status variables do not describe a valid catalog.
    #[error("invalid status catalog: {0}")]
    Statuses(#[from] StatusCatalogError),
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    bind_addr: SocketAddr,
    database_url: Option<String>,
    statuses: StatusCatalog,
    log_filter: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr = get("TASKBOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: err.to_string(),
            })?;

        let raw_statuses = get("TASKBOARD_STATUSES").unwrap_or_else(|| DEFAULT_STATUSES.to_owned());
        let names: Vec<&str> = raw_statuses.split(',').map(str::trim).collect();
        let default_status = get("TASKBOARD_DEFAULT_STATUS")
            .or_else(|| names.first().map(|name| (*name).to_owned()))
            .unwrap_or_default();
        let done_status =
            get("TASKBOARD_DONE_STATUS").unwrap_or_else(|| DEFAULT_DONE_STATUS.to_owned());
        let statuses = StatusCatalog::new(&names, &default_status, &done_status)?;

        let log_filter = get("TASKBOARD_LOG")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            statuses,
            log_filter,
        })
    }

    /// Address the HTTP server listens on.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// `PostgreSQL` connection string; `None` selects in-memory storage.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Allowed task statuses.
    #[must_use]
    pub const fn statuses(&self) -> &StatusCatalog {
        &self.statuses
    }

    /// `tracing` filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
