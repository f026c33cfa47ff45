//! Native client trait for the settings store
//!
//! This trait defines the API application code uses to read and write
//! settings. NO HTTP - direct function calls.

use super::{
    error::SettingsError,
    model::{SettingRow, SettingValue},
};
use async_trait::async_trait;

/// Settings store API
///
/// Keys follow the grammar `[key[.childPath]][:locale]`: the `:` split
/// happens first, then the `.` split on the remainder. Only `get` walks
/// child paths; every other operation addresses rows by their literal key.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    // ===== Reads =====

    /// Get the value for a composite key; `None` when absent or empty
    async fn get(&self, key: &str) -> Result<Option<SettingValue>, SettingsError>;

    /// Get the value for a composite key, or `default` when absent or empty
    async fn get_or(
        &self,
        key: &str,
        default: SettingValue,
    ) -> Result<SettingValue, SettingsError>;

    /// Row matching the key's (key, locale) pair exactly
    async fn first(&self, key: &str) -> Result<Option<SettingRow>, SettingsError>;

    /// Whether a row exists for the key
    async fn has(&self, key: &str) -> Result<bool, SettingsError>;

    /// Whether no row exists for the key
    async fn has_not(&self, key: &str) -> Result<bool, SettingsError>;

    /// Whether the key exists with exactly this value
    async fn is(&self, key: &str, value: SettingValue) -> Result<bool, SettingsError>;

    /// Whether the key exists with a different value
    async fn is_not(&self, key: &str, value: SettingValue) -> Result<bool, SettingsError>;

    /// The full settings collection, ordered by (key, locale)
    async fn all(&self) -> Result<Vec<SettingRow>, SettingsError>;

    // ===== Writes =====

    /// Create or update the row for the key's (key, locale) pair
    async fn set(&self, key: &str, value: SettingValue) -> Result<SettingRow, SettingsError>;

    /// Create or update several settings; each key resolves its own locale
    async fn set_many(
        &self,
        entries: Vec<(String, SettingValue)>,
    ) -> Result<(), SettingsError>;

    /// Delete the row for the key's (key, locale) pair
    async fn forget(&self, key: &str) -> Result<(), SettingsError>;

    /// Delete the key's rows across every locale
    async fn forget_all(&self, key: &str) -> Result<(), SettingsError>;
}
