//! Settings Store
//!
//! Locale-aware settings storage over a relational table. Settings are
//! addressed by composite keys carrying an optional `:locale` suffix and an
//! optional dotted child path into compound values, e.g. `site_title:ar` or
//! `mail.from.address`.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, SettingRow, SettingValue, ValueKind,
};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::Service;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;

pub use infra::storage::connect;
