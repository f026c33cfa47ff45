//! Configuration for the settings store

use serde::Deserialize;

/// Settings store configuration
///
/// Passed explicitly to `infra::storage::connect`; there is no global
/// default connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection URL (e.g. `sqlite::memory:`, `postgres://...`)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Log SQL statements through the tracing subscriber
    #[serde(default)]
    pub sqlx_logging: bool,

    /// Apply pending migrations on connect
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> u32 {
    5
}
