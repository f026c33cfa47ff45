//! Repository trait for settings rows
//!
//! This trait defines the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::SettingRow;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for settings rows, keyed by the unique (key, locale) pair
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// All rows, ordered by (key, locale)
    async fn find_all(&self) -> Result<Vec<SettingRow>>;

    /// Row matching the (key, locale) pair exactly
    async fn find_one(&self, key: &str, locale: Option<&str>) -> Result<Option<SettingRow>>;

    /// Create or update the row for the (key, locale) pair; returns the
    /// stored row
    async fn upsert(&self, row: &SettingRow) -> Result<SettingRow>;

    /// Delete the row for the (key, locale) pair; returns the rows removed
    async fn delete(&self, key: &str, locale: Option<&str>) -> Result<u64>;

    /// Delete the key's rows across every locale; returns the rows removed
    async fn delete_all_locales(&self, key: &str) -> Result<u64>;
}
