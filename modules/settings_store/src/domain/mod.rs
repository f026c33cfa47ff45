//! Domain layer - key resolution, value codec and the settings service

pub mod codec;
pub mod key;
pub mod repository;
pub mod service;

pub use key::ResolvedKey;
pub use repository::SettingsRepository;
pub use service::Service;
