//! Association type lookup entity
//!
//! `abbr_id` points at the translation group holding the localized
//! abbreviation used when composing display names.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "association_type")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub abbr_id: Option<Uuid>,
	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::association::Entity")]
	Associations,
}

impl Related<super::association::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Associations.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			id: Set(Uuid::new_v4()),
			created_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}
