//! Common test utilities and a shared multilingual settings catalog

use serde_json::json;
use settings_store::{SettingValue, SettingsApi, SettingsError};

/// Realistic settings catalog for testing
/// Site chrome in three locales plus structured mail configuration
#[derive(Debug, Clone)]
pub struct TestCatalog {
    pub entries: Vec<(String, SettingValue)>,
}

impl TestCatalog {
    /// Create the catalog with its fixed entries
    pub fn new() -> Self {
        let entries = vec![
            ("site_title".to_string(), SettingValue::scalar("My Site")),
            ("site_title:ar".to_string(), SettingValue::scalar("موقعي")),
            ("site_title:fr".to_string(), SettingValue::scalar("Mon site")),
            (
                "tagline".to_string(),
                SettingValue::scalar("Settings that travel well"),
            ),
            (
                "mail".to_string(),
                SettingValue::compound(json!({
                    "from": {"address": "no-reply@example.com", "name": "My Site"},
                    "smtp": {"host": "mail.example.com", "port": 587},
                    "backup_hosts": ["mx1.example.com", "mx2.example.com"],
                })),
            ),
        ];

        Self { entries }
    }

    /// Seed every entry through the public API
    pub async fn seed(&self, api: &dyn SettingsApi) -> Result<(), SettingsError> {
        for (key, value) in &self.entries {
            api.set(key, value.clone()).await?;
        }
        Ok(())
    }

    /// Print the catalog structure
    pub fn print_structure(&self) {
        println!("\n📊 Settings Catalog:");
        for (key, value) in &self.entries {
            match value {
                SettingValue::Scalar(text) => println!("   {} = {}", key, text),
                SettingValue::Compound(json) => println!("   {} = {}", key, json),
            }
        }
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}
