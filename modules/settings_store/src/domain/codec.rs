//! Value codec - conversions between `SettingValue` and its stored form
//!
//! The stored form is a `(kind, text)` pair. Decoding is driven by the
//! persisted discriminator, never by sniffing the text, so a literal
//! scalar that happens to look like JSON is never misread as a compound.

use crate::contract::{SettingValue, ValueKind};

/// Decode failure for a stored value
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Compound text that is not valid JSON
    #[error("compound value is not valid JSON: {0}")]
    MalformedCompound(#[source] serde_json::Error),
}

/// Encode a value into its discriminator and stored text
pub fn encode(value: &SettingValue) -> (ValueKind, String) {
    match value {
        SettingValue::Scalar(text) => (ValueKind::Scalar, text.clone()),
        SettingValue::Compound(json) => (ValueKind::Compound, json.to_string()),
    }
}

/// Decode stored text under its discriminator
pub fn decode(kind: ValueKind, text: &str) -> Result<SettingValue, CodecError> {
    match kind {
        ValueKind::Scalar => Ok(SettingValue::Scalar(text.to_string())),
        ValueKind::Compound => serde_json::from_str(text)
            .map(SettingValue::Compound)
            .map_err(CodecError::MalformedCompound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_roundtrip() {
        let value = SettingValue::scalar("hello");
        let (kind, text) = encode(&value);
        assert_eq!(kind, ValueKind::Scalar);
        assert_eq!(decode(kind, &text).unwrap(), value);
    }

    #[test]
    fn test_compound_roundtrip() {
        let value = SettingValue::compound(json!({"a": 1, "b": [2, 3]}));
        let (kind, text) = encode(&value);
        assert_eq!(kind, ValueKind::Compound);
        assert_eq!(decode(kind, &text).unwrap(), value);
    }

    #[test]
    fn test_json_looking_scalar_stays_scalar() {
        // Under the untagged format this text would decode as an array
        let value = SettingValue::scalar(r#"["not", "a", "compound"]"#);
        let (kind, text) = encode(&value);
        assert_eq!(kind, ValueKind::Scalar);
        assert_eq!(decode(kind, &text).unwrap(), value);
    }

    #[test]
    fn test_malformed_compound_errors() {
        let result = decode(ValueKind::Compound, "{not json");
        assert!(matches!(result, Err(CodecError::MalformedCompound(_))));
    }
}
