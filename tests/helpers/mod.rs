//! Shared test setup: tempfile sqlite database with the schema migrated and
//! helpers for seeding lookup rows.

#![allow(dead_code)]

use hoa_core::infra::db;
use hoa_core::infra::db::entities::{
	association_type, association_unit_type, association_unit_type_service, building, service,
	translation, unit_type,
};
use hoa_core::ops::associations::DesiredLinks;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::collections::{BTreeMap, BTreeSet};
use tempfile::TempDir;
use uuid::Uuid;

pub struct TestDb {
	pub conn: DatabaseConnection,
	_temp: TempDir,
}

pub async fn setup() -> TestDb {
	let temp = TempDir::new().unwrap();
	let db_path = temp.path().join("hoa_test.db");
	let url = format!("sqlite://{}?mode=rwc", db_path.display());
	let conn = db::connect(&url).await.unwrap();

	TestDb { conn, _temp: temp }
}

pub async fn seed_unit_type(db: &DatabaseConnection) -> Uuid {
	unit_type::ActiveModel::new().insert(db).await.unwrap().id
}

pub async fn seed_service(db: &DatabaseConnection) -> Uuid {
	service::ActiveModel::new().insert(db).await.unwrap().id
}

pub async fn seed_association_type(db: &DatabaseConnection, abbr_id: Option<Uuid>) -> Uuid {
	association_type::ActiveModel {
		abbr_id: Set(abbr_id),
		..association_type::ActiveModel::new()
	}
	.insert(db)
	.await
	.unwrap()
	.id
}

pub async fn seed_translation(db: &DatabaseConnection, group_id: Uuid, lang: &str, text: &str) {
	translation::ActiveModel {
		group_id: Set(group_id),
		lang: Set(lang.to_owned()),
		text: Set(text.to_owned()),
		..translation::ActiveModel::new()
	}
	.insert(db)
	.await
	.unwrap();
}

pub async fn seed_building(db: &DatabaseConnection, association_id: Uuid, name: &str) -> Uuid {
	building::ActiveModel {
		association_id: Set(association_id),
		name: Set(name.to_owned()),
		..building::ActiveModel::new()
	}
	.insert(db)
	.await
	.unwrap()
	.id
}

/// Desired-links literal: `links(&[(ut, &[s1, s2])])`.
pub fn links(pairs: &[(Uuid, &[Uuid])]) -> DesiredLinks {
	pairs
		.iter()
		.map(|&(unit_type_id, service_ids)| (unit_type_id, service_ids.to_vec()))
		.collect()
}

/// Order-insensitive form of a link map for equality assertions.
pub fn normalize(links: &DesiredLinks) -> BTreeMap<Uuid, BTreeSet<Uuid>> {
	links
		.iter()
		.map(|(&unit_type_id, service_ids)| {
			(unit_type_id, service_ids.iter().copied().collect())
		})
		.collect()
}

/// Every service link must have its unit-type link, and every unit-type link
/// its association.
pub async fn assert_no_orphans(db: &DatabaseConnection) {
	use hoa_core::infra::db::entities::association;

	let association_ids: BTreeSet<Uuid> = association::Entity::find()
		.all(db)
		.await
		.unwrap()
		.into_iter()
		.map(|row| row.id)
		.collect();
	let unit_type_links = association_unit_type::Entity::find().all(db).await.unwrap();
	let link_ids: BTreeSet<Uuid> = unit_type_links.iter().map(|row| row.id).collect();

	for link in &unit_type_links {
		assert!(
			association_ids.contains(&link.association_id),
			"unit-type link {} references deleted association {}",
			link.id,
			link.association_id
		);
	}

	for row in association_unit_type_service::Entity::find().all(db).await.unwrap() {
		assert!(
			link_ids.contains(&row.association_unit_type_id),
			"service link {} references deleted unit-type link {}",
			row.id,
			row.association_unit_type_id
		);
	}
}
