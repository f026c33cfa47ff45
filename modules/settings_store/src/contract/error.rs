//! Contract error types for the settings store
//!
//! These errors are transport-agnostic. Backing-store failures are wrapped,
//! not translated: this layer is a thin accessor, not a resilience boundary.

/// Settings store errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Composite key failed to parse
    #[error("invalid setting key '{key}': {details}")]
    InvalidKey {
        /// Raw key as supplied by the caller
        key: String,
        /// Parse failure details
        details: String,
    },

    /// Backing store failure, propagated from the repository
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
