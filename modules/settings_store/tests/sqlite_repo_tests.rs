//! End-to-end tests over an in-memory SQLite database
//!
//! These exercise the real SeaORM repository, the migrations and the
//! service together through the public API.

use sea_orm::ConnectionTrait;
use serde_json::json;
use settings_store::domain::Service;
use settings_store::infra::storage::{self, repositories::SeaOrmSettingsRepository};
use settings_store::{Config, SettingValue, SettingsError};
use std::sync::Arc;

mod common;
use common::TestCatalog;

/// In-memory SQLite needs a single connection: every connection in the
/// pool would otherwise be its own empty database.
fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        sqlx_logging: false,
        run_migrations: true,
    }
}

async fn create_test_service() -> (Service, Arc<sea_orm::DatabaseConnection>) {
    let db = Arc::new(
        storage::connect(&test_config())
            .await
            .expect("Failed to connect"),
    );
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone()));
    (Service::new(repo), db)
}

#[tokio::test]
async fn test_scalar_and_compound_roundtrip() {
    let (service, _db) = create_test_service().await;
    let catalog = TestCatalog::new();
    catalog.print_structure();

    catalog.seed(&service).await.expect("Failed to seed");

    // Localized scalar
    let value = service.get("site_title:ar").await.expect("get");
    assert_eq!(value, Some(SettingValue::scalar("موقعي")));

    // Never-set locale falls back
    let value = service.get("site_title:en").await.expect("get");
    assert_eq!(value, None);

    // Compound comes back structurally equal
    let value = service.get("mail").await.expect("get");
    let json = value
        .as_ref()
        .and_then(SettingValue::as_json)
        .expect("mail should be compound");
    assert_eq!(json["smtp"]["host"], json!("mail.example.com"));

    // Nested read through the stored compound
    let value = service.get("mail.from.address").await.expect("get");
    assert_eq!(value, Some(SettingValue::scalar("no-reply@example.com")));
}

#[tokio::test]
async fn test_upsert_keeps_single_row_per_key_locale() {
    let (service, _db) = create_test_service().await;

    service.set("site_title", "First").await.expect("set");
    service.set("site_title", "Second").await.expect("set");
    service.set("site_title:fr", "Deuxième").await.expect("set");

    let rows = service.all().await.expect("all");
    assert_eq!(rows.len(), 2, "one row per (key, locale) pair");

    let value = service.get("site_title").await.expect("get");
    assert_eq!(value, Some(SettingValue::scalar("Second")));
}

#[tokio::test]
async fn test_update_preserves_created_at() {
    let (service, _db) = create_test_service().await;

    let first = service.set("motd", "hello").await.expect("set");
    let second = service.set("motd", "goodbye").await.expect("set");

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn test_forget_scopes() {
    let (service, _db) = create_test_service().await;
    let catalog = TestCatalog::new();
    catalog.seed(&service).await.expect("Failed to seed");

    // forget removes only the resolved locale
    service.forget("site_title:ar").await.expect("forget");
    assert_eq!(service.get("site_title:ar").await.expect("get"), None);
    assert_eq!(
        service.get("site_title:fr").await.expect("get"),
        Some(SettingValue::scalar("Mon site"))
    );

    // forget_all removes the remaining locales
    service.forget_all("site_title").await.expect("forget_all");
    assert_eq!(service.get("site_title").await.expect("get"), None);
    assert_eq!(service.get("site_title:fr").await.expect("get"), None);

    // unrelated keys survive
    assert!(service.has("tagline").await.expect("has"));
}

#[tokio::test]
async fn test_all_is_ordered_by_key_and_locale() {
    let (service, _db) = create_test_service().await;

    service.set("b", "2").await.expect("set");
    service.set("a:fr", "un").await.expect("set");
    service.set("a", "1").await.expect("set");

    let rows = service.all().await.expect("all");
    let keys: Vec<(String, Option<String>)> = rows
        .into_iter()
        .map(|row| (row.key, row.locale))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("a".to_string(), None),
            ("a".to_string(), Some("fr".to_string())),
            ("b".to_string(), None),
        ]
    );
}

#[tokio::test]
async fn test_corrupt_row_surfaces_storage_error() {
    let (service, db) = create_test_service().await;

    // Bypass the repository to plant a row with an unknown discriminator
    db.execute_unprepared(
        "INSERT INTO settings (key, locale, kind, value, created_at, updated_at) \
         VALUES ('broken', NULL, 'mystery', 'x', CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
    )
    .await
    .expect("Failed to insert corrupt row");

    let result = service.all().await;
    assert!(matches!(result, Err(SettingsError::Storage(_))));
}

#[tokio::test]
async fn test_json_looking_scalar_is_not_misread() {
    let (service, _db) = create_test_service().await;

    // Under a sniffing decoder this text would come back as an array
    let tricky = r#"["a", "b"]"#;
    service.set("motto", tricky).await.expect("set");

    let value = service.get("motto").await.expect("get");
    assert_eq!(value, Some(SettingValue::scalar(tricky)));
}
