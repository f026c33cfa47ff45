//! Domain service - row cache and persistence orchestration
//!
//! One `Service` instance is meant to serve one logical operation sequence
//! (typically a request). Its row cache is a private snapshot of the whole
//! settings table, loaded on first read and discarded after every write.

use super::key::ResolvedKey;
use super::repository::SettingsRepository;
use crate::contract::{SettingRow, SettingValue, SettingsApi, SettingsError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Settings service over an abstract row repository
pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    /// Memoized snapshot of every row; cleared on each write
    cache: RwLock<Option<Arc<Vec<SettingRow>>>>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self {
            repo,
            cache: RwLock::new(None),
        }
    }

    // ===== Row cache =====

    /// Cached collection, loading it on first use.
    ///
    /// The lock is never held across the repository call; a concurrent
    /// first read at worst scans the table twice.
    async fn collection(&self) -> Result<Arc<Vec<SettingRow>>, SettingsError> {
        if let Some(rows) = self.cache.read().clone() {
            return Ok(rows);
        }

        let rows = Arc::new(self.repo.find_all().await?);
        tracing::debug!(rows = rows.len(), "settings cache populated");
        *self.cache.write() = Some(rows.clone());

        Ok(rows)
    }

    /// Drop the snapshot so the next read re-scans the table
    fn invalidate(&self) {
        *self.cache.write() = None;
        tracing::debug!("settings cache invalidated");
    }

    /// First cached row matching the (key, locale) pair exactly
    async fn lookup(
        &self,
        key: &str,
        locale: Option<&str>,
    ) -> Result<Option<SettingRow>, SettingsError> {
        let rows = self.collection().await?;

        Ok(rows
            .iter()
            .find(|row| row.key == key && row.locale.as_deref() == locale)
            .cloned())
    }

    // ===== Reads =====

    /// Get the value for a composite key.
    ///
    /// A missing row, a missing or null child, a dotted path into a
    /// scalar, and an empty scalar all yield `None`.
    pub async fn get(&self, key: &str) -> Result<Option<SettingValue>, SettingsError> {
        let resolved = ResolvedKey::parse(key)?;

        let value = match &resolved.child_path {
            Some(path) => self
                .lookup(&resolved.storage_key, resolved.locale_ref())
                .await?
                .and_then(|row| match &row.value {
                    SettingValue::Compound(json) => {
                        extract_child(json, path).cloned().map(SettingValue::from)
                    }
                    SettingValue::Scalar(_) => None,
                }),
            None => self
                .lookup(&resolved.key, resolved.locale_ref())
                .await?
                .map(|row| row.value),
        };

        Ok(value.filter(|value| !value.is_empty()))
    }

    /// Get the value for a composite key, or `default` when absent or empty
    pub async fn get_or(
        &self,
        key: &str,
        default: impl Into<SettingValue>,
    ) -> Result<SettingValue, SettingsError> {
        Ok(self.get(key).await?.unwrap_or_else(|| default.into()))
    }

    /// Row matching the key's (key, locale) pair exactly
    pub async fn first(&self, key: &str) -> Result<Option<SettingRow>, SettingsError> {
        let resolved = ResolvedKey::parse(key)?;
        self.lookup(&resolved.key, resolved.locale_ref()).await
    }

    /// Whether a row exists for the key
    pub async fn has(&self, key: &str) -> Result<bool, SettingsError> {
        Ok(self.first(key).await?.is_some())
    }

    /// Whether no row exists for the key
    pub async fn has_not(&self, key: &str) -> Result<bool, SettingsError> {
        Ok(!self.has(key).await?)
    }

    /// Whether the key exists with exactly this value
    pub async fn is(
        &self,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> Result<bool, SettingsError> {
        let value = value.into();
        Ok(self.first(key).await?.is_some_and(|row| row.value == value))
    }

    /// Whether the key exists with a different value
    pub async fn is_not(
        &self,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> Result<bool, SettingsError> {
        let value = value.into();
        Ok(self.first(key).await?.is_some_and(|row| row.value != value))
    }

    /// The full settings collection, ordered by (key, locale)
    pub async fn all(&self) -> Result<Vec<SettingRow>, SettingsError> {
        Ok(self.collection().await?.as_ref().clone())
    }

    // ===== Writes =====

    /// Create or update the row for the key's (key, locale) pair
    pub async fn set(
        &self,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> Result<SettingRow, SettingsError> {
        let resolved = ResolvedKey::parse(key)?;
        let stored = self.upsert_resolved(&resolved, value.into()).await?;
        self.invalidate();

        Ok(stored)
    }

    /// Create or update several settings; each key resolves its own locale
    pub async fn set_many(
        &self,
        entries: Vec<(String, SettingValue)>,
    ) -> Result<(), SettingsError> {
        for (key, value) in entries {
            let resolved = ResolvedKey::parse(&key)?;
            self.upsert_resolved(&resolved, value).await?;
        }
        self.invalidate();

        Ok(())
    }

    /// Delete the row for the key's (key, locale) pair
    pub async fn forget(&self, key: &str) -> Result<(), SettingsError> {
        let resolved = ResolvedKey::parse(key)?;
        let removed = self.repo.delete(&resolved.key, resolved.locale_ref()).await?;
        self.invalidate();
        tracing::debug!(key = %resolved.key, locale = ?resolved.locale, removed, "setting removed");

        Ok(())
    }

    /// Delete the key's rows across every locale
    pub async fn forget_all(&self, key: &str) -> Result<(), SettingsError> {
        let resolved = ResolvedKey::parse(key)?;
        let removed = self.repo.delete_all_locales(&resolved.key).await?;
        self.invalidate();
        tracing::debug!(key = %resolved.key, removed, "setting removed for all locales");

        Ok(())
    }

    // ===== Helper Methods =====

    async fn upsert_resolved(
        &self,
        resolved: &ResolvedKey,
        value: SettingValue,
    ) -> Result<SettingRow, SettingsError> {
        let now = chrono::Utc::now();
        let row = SettingRow {
            key: resolved.key.clone(),
            locale: resolved.locale.clone(),
            value,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repo.upsert(&row).await?;
        tracing::debug!(key = %stored.key, locale = ?stored.locale, "setting stored");

        Ok(stored)
    }
}

/// Walk a dotted path through a decoded compound value: object fields by
/// name, array elements by numeric index.
fn extract_child<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;

    for segment in path.split('.') {
        current = match current {
            serde_json::Value::Object(map) => map.get(segment)?,
            serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

#[async_trait]
impl SettingsApi for Service {
    async fn get(&self, key: &str) -> Result<Option<SettingValue>, SettingsError> {
        Service::get(self, key).await
    }

    async fn get_or(
        &self,
        key: &str,
        default: SettingValue,
    ) -> Result<SettingValue, SettingsError> {
        Service::get_or(self, key, default).await
    }

    async fn first(&self, key: &str) -> Result<Option<SettingRow>, SettingsError> {
        Service::first(self, key).await
    }

    async fn has(&self, key: &str) -> Result<bool, SettingsError> {
        Service::has(self, key).await
    }

    async fn has_not(&self, key: &str) -> Result<bool, SettingsError> {
        Service::has_not(self, key).await
    }

    async fn is(&self, key: &str, value: SettingValue) -> Result<bool, SettingsError> {
        Service::is(self, key, value).await
    }

    async fn is_not(&self, key: &str, value: SettingValue) -> Result<bool, SettingsError> {
        Service::is_not(self, key, value).await
    }

    async fn all(&self) -> Result<Vec<SettingRow>, SettingsError> {
        Service::all(self).await
    }

    async fn set(&self, key: &str, value: SettingValue) -> Result<SettingRow, SettingsError> {
        Service::set(self, key, value).await
    }

    async fn set_many(
        &self,
        entries: Vec<(String, SettingValue)>,
    ) -> Result<(), SettingsError> {
        Service::set_many(self, entries).await
    }

    async fn forget(&self, key: &str) -> Result<(), SettingsError> {
        Service::forget(self, key).await
    }

    async fn forget_all(&self, key: &str) -> Result<(), SettingsError> {
        Service::forget_all(self, key).await
    }
}
