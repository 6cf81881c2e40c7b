//! Building entity
//!
//! External usage table for the integrity guard: an association referenced by
//! any building may not be deleted.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "building")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub association_id: Uuid,
	pub name: String,
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
}

impl Related<super::association::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Association.def()
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
