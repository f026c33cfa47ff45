//! Contract models for the settings store
//!
//! These models are transport-agnostic. NO serde derives - these are pure
//! domain models; the persisted encoding lives in the codec and mapper.

use chrono::{DateTime, Utc};

/// A single persisted setting
#[derive(Debug, Clone, PartialEq)]
pub struct SettingRow {
    /// Setting key; unique together with `locale`
    pub key: String,
    /// Locale tag; `None` is the non-localized default variant
    pub locale: Option<String>,
    /// Decoded setting value
    pub value: SettingValue,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Setting value, tagged by shape
///
/// The tag is persisted next to the value text, so reading a stored value
/// never has to guess whether the text is a serialized structure.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// A plain scalar, stored as its text form
    Scalar(String),
    /// A structured value (sequence or mapping), stored as JSON text
    Compound(serde_json::Value),
}

impl SettingValue {
    /// Build a scalar value
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    /// Build a compound value
    pub fn compound(json: serde_json::Value) -> Self {
        Self::Compound(json)
    }

    /// Scalar text, if this is a scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            Self::Compound(_) => None,
        }
    }

    /// Structured payload, if this is a compound
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Scalar(_) => None,
            Self::Compound(json) => Some(json),
        }
    }

    /// Discriminator persisted next to the encoded text
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Compound(_) => ValueKind::Compound,
        }
    }

    /// Whether the value counts as absent for lookups (empty scalar text)
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Scalar(text) if text.is_empty())
    }
}

impl From<&str> for SettingValue {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(text: String) -> Self {
        Self::Scalar(text)
    }
}

impl From<serde_json::Value> for SettingValue {
    /// Objects and arrays become compounds; every other JSON value becomes
    /// a scalar of its display form (strings unquoted, `null` empty).
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value;

        match json {
            Value::Object(_) | Value::Array(_) => Self::Compound(json),
            Value::String(text) => Self::Scalar(text),
            Value::Null => Self::Scalar(String::new()),
            other => Self::Scalar(other.to_string()),
        }
    }
}

/// Value discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain scalar text
    Scalar,
    /// JSON-encoded structure
    Compound,
}
