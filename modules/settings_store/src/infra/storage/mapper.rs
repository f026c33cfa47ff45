//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Rows with an
//! unknown discriminator or unparseable compound text fail the conversion;
//! they surface as storage errors, not as silently-wrong values.

use super::entity;
use crate::contract::{SettingRow, ValueKind};
use crate::domain::codec;
use anyhow::Context;

impl TryFrom<entity::Model> for SettingRow {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let kind = parse_value_kind(&entity.kind).with_context(|| {
            format!("setting '{}' has unknown kind '{}'", entity.key, entity.kind)
        })?;
        let value = codec::decode(kind, &entity.value)
            .with_context(|| format!("setting '{}' failed to decode", entity.key))?;

        Ok(Self {
            key: entity.key,
            locale: entity.locale,
            value,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&SettingRow> for entity::ActiveModel {
    fn from(model: &SettingRow) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        let (kind, text) = codec::encode(&model.value);

        Self {
            id: NotSet,
            key: Set(model.key.clone()),
            locale: Set(model.locale.clone()),
            kind: Set(format_value_kind(kind)),
            value: Set(text),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Discriminator strings =====

pub(crate) fn parse_value_kind(s: &str) -> Option<ValueKind> {
    match s {
        "scalar" => Some(ValueKind::Scalar),
        "compound" => Some(ValueKind::Compound),
        _ => None,
    }
}

pub(crate) fn format_value_kind(kind: ValueKind) -> String {
    match kind {
        ValueKind::Scalar => "scalar",
        ValueKind::Compound => "compound",
    }
    .to_string()
}
