//! Unit-type link ↔ service junction entity
//!
//! Second level of the nested link graph. Unique per
//! (`association_unit_type_id`, `service_id`).

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "association_unit_type_service")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub association_unit_type_id: Uuid,
	pub service_id: Uuid,
	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::association_unit_type::Entity",
		from = "Column::AssociationUnitTypeId",
		to = "super::association_unit_type::Column::Id"
	)]
	UnitTypeLink,

	#[sea_orm(
		belongs_to = "super::service::Entity",
		from = "Column::ServiceId",
		to = "super::service::Column::Id"
	)]
	Service,
}

impl Related<super::association_unit_type::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::UnitTypeLink.def()
	}
}

impl Related<super::service::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Service.def()
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
