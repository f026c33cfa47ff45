//! Composite key resolution
//!
//! Key grammar: `[key[.childPath]][:locale]`. The `:` split happens first,
//! at the first occurrence; the `.` split follows on the remainder. The
//! parsed key is an explicit value threaded through each operation - there
//! is no parse state to reset between calls.

use crate::contract::SettingsError;

/// A parsed composite key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    /// Locale-stripped key as supplied by the caller (may contain dots);
    /// rows are addressed by this literal key for everything but nested
    /// `get` lookups
    pub key: String,
    /// Prefix before the first `.` - the key a nested lookup reads from
    pub storage_key: String,
    /// Locale from the `:locale` suffix; `None` is the default variant
    pub locale: Option<String>,
    /// Dotted path into a compound value, without the `storage_key.` prefix
    pub child_path: Option<String>,
}

impl ResolvedKey {
    /// Parse a raw composite key.
    ///
    /// Empty suffixes (`"key:"`, `"key."`) resolve to absent rather than
    /// empty; an empty key before the suffixes is rejected.
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let (remainder, locale) = match raw.split_once(':') {
            Some((before, after)) if !after.is_empty() => (before, Some(after.to_string())),
            Some((before, _)) => (before, None),
            None => (raw, None),
        };

        let (storage_key, child_path) = match remainder.split_once('.') {
            Some((parent, rest)) if !rest.is_empty() => (parent, Some(rest.to_string())),
            Some((parent, _)) => (parent, None),
            None => (remainder, None),
        };

        if storage_key.is_empty() {
            return Err(SettingsError::InvalidKey {
                key: raw.to_string(),
                details: "key must be non-empty".to_string(),
            });
        }

        Ok(Self {
            key: remainder.to_string(),
            storage_key: storage_key.to_string(),
            locale,
            child_path,
        })
    }

    /// Locale as a borrowed filter argument
    pub fn locale_ref(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}
