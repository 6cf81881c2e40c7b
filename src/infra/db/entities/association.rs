//! Association entity
//!
//! The root of the nested link graph. Unit-type links hang off it, and each
//! of those carries its own service links.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "association")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub name: String,
	pub association_type_id: Option<Uuid>,
	pub city_id: Option<Uuid>,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::association_type::Entity",
		from = "Column::AssociationTypeId",
		to = "super::association_type::Column::Id"
	)]
	AssociationType,

	#[sea_orm(has_many = "super::association_unit_type::Entity")]
	UnitTypeLinks,

	#[sea_orm(has_many = "super::building::Entity")]
	Buildings,
}

impl Related<super::association_type::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::AssociationType.def()
	}
}

impl Related<super::association_unit_type::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::UnitTypeLinks.def()
	}
}

impl Related<super::building::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Buildings.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			id: Set(Uuid::new_v4()),
			created_at: Set(chrono::Utc::now()),
			updated_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}
