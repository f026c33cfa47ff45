//! SeaORM repository implementations

use crate::contract::SettingRow;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::entity;

/// Filter matching the unique (key, locale) pair. A NULL locale has to be
/// matched with IS NULL, not equality.
fn key_locale_filter(key: &str, locale: Option<&str>) -> Condition {
    let locale_condition = match locale {
        Some(locale) => entity::Column::Locale.eq(locale),
        None => entity::Column::Locale.is_null(),
    };

    Condition::all()
        .add(entity::Column::Key.eq(key))
        .add(locale_condition)
}

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_all(&self) -> Result<Vec<SettingRow>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Key)
            .order_by_asc(entity::Column::Locale)
            .all(&*self.db)
            .await?;

        models.into_iter().map(SettingRow::try_from).collect()
    }

    async fn find_one(&self, key: &str, locale: Option<&str>) -> Result<Option<SettingRow>> {
        let model = entity::Entity::find()
            .filter(key_locale_filter(key, locale))
            .one(&*self.db)
            .await?;

        model.map(SettingRow::try_from).transpose()
    }

    async fn upsert(&self, row: &SettingRow) -> Result<SettingRow> {
        use sea_orm::ActiveValue::Set;

        let existing = entity::Entity::find()
            .filter(key_locale_filter(&row.key, row.locale.as_deref()))
            .one(&*self.db)
            .await?;

        let result = match existing {
            Some(model) => {
                // Update in place, keeping the original creation timestamp
                let created_at = model.created_at;
                let mut active: entity::ActiveModel = row.into();
                active.id = Set(model.id);
                active.created_at = Set(created_at);
                active.updated_at = Set(chrono::Utc::now());
                entity::Entity::update(active).exec(&*self.db).await?
            }
            None => {
                let active: entity::ActiveModel = row.into();
                entity::Entity::insert(active)
                    .exec_with_returning(&*self.db)
                    .await?
            }
        };

        result.try_into()
    }

    async fn delete(&self, key: &str, locale: Option<&str>) -> Result<u64> {
        let result = entity::Entity::delete_many()
            .filter(key_locale_filter(key, locale))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_all_locales(&self, key: &str) -> Result<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Key.eq(key))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
