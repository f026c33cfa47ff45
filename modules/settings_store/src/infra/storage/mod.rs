//! Storage layer - database entities, repositories and schema management

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use crate::config::Config;
use anyhow::Result;
use migrations::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a database connection from the typed configuration, applying
/// pending migrations when configured to.
///
/// For `sqlite::memory:` URLs the pool size should be 1: each in-memory
/// SQLite connection is its own database.
pub async fn connect(config: &Config) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("settings schema up to date");
    }

    Ok(db)
}
