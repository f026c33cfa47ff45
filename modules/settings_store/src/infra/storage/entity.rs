//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Settings table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Surrogate row id
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Setting key; unique together with `locale`
    pub key: String,

    /// Locale tag; NULL is the non-localized default variant
    pub locale: Option<String>,

    /// Value discriminator (`scalar` or `compound`)
    pub kind: String,

    /// Stored value text
    pub value: String,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
