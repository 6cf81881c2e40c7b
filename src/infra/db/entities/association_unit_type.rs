//! Association ↔ unit type junction entity
//!
//! First level of the nested link graph. Unique per
//! (`association_id`, `unit_type_id`); its service links must be removed
//! before the row itself is.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "association_unit_type")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub association_id: Uuid,
	pub unit_type_id: Uuid,
	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::association::Entity",
		from = "Column::AssociationId",
		to = "super::association::Column::Id"
	)]
	Association,

	#[sea_orm(
		belongs_to = "super::unit_type::Entity",
		from = "Column::UnitTypeId",
		to = "super::unit_type::Column::Id"
	)]
	UnitType,

	#[sea_orm(has_many = "super::association_unit_type_service::Entity")]
	ServiceLinks,
}

impl Related<super::association::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Association.def()
	}
}

impl Related<super::unit_type::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::UnitType.def()
	}
}

impl Related<super::association_unit_type_service::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::ServiceLinks.def()
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
