//! Hierarchical synchronizer
//!
//! Moves the nested link graph of one association from its persisted state to
//! the caller's desired state inside a single transaction: parents are
//! created before their children, children deleted before their parents, and
//! on any failure the transaction rolls back and the original database error
//! propagates unchanged.

use super::diff::{diff_keys, DesiredLinks};
use super::query::AssociationView;
use super::AssociationService;
use crate::common::errors::AssociationError;
use crate::infra::db::entities::{association, association_unit_type, association_unit_type_service};
use sea_orm::{
	ActiveModelBehavior, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseTransaction,
	EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Scalar fields of an association, as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationInput {
	pub name: String,
	pub association_type_id: Option<Uuid>,
	pub city_id: Option<Uuid>,
}

impl AssociationService {
	/// Create an association together with its full initial link graph.
	///
	/// One transaction: the association row, then one unit-type link per key
	/// in `links`, then one service link per service under it. A failure at
	/// any step (a foreign-key violation on an unknown unit type or service
	/// included) leaves nothing behind.
	pub async fn create(
		&self,
		input: AssociationInput,
		links: &DesiredLinks,
		lang: &str,
	) -> Result<AssociationView, AssociationError> {
		let txn = self.db.begin().await?;

		let id = match Self::insert_subtree(&txn, input, links).await {
			Ok(id) => id,
			Err(err) => {
				let _ = txn.rollback().await;
				return Err(err.into());
			}
		};
		txn.commit().await?;
		info!(association_id = %id, unit_types = links.len(), "created association");

		self.get(id, lang).await?.ok_or(AssociationError::NotFound(id))
	}

	/// Reconcile an association's link graph with `links` and update its
	/// scalar fields, all in one transaction.
	///
	/// New unit types get their full service subtree; removed unit types lose
	/// their service links first, then the link row; kept unit types have
	/// only their service difference applied. A unit type whose services are
	/// unchanged issues zero writes. Afterwards the persisted graph equals
	/// `links` exactly — or, on any failure, nothing changed at all.
	pub async fn update(
		&self,
		id: Uuid,
		input: AssociationInput,
		links: &DesiredLinks,
		lang: &str,
	) -> Result<AssociationView, AssociationError> {
		let existing = association::Entity::find_by_id(id)
			.one(&self.db)
			.await?
			.ok_or(AssociationError::NotFound(id))?;

		let txn = self.db.begin().await?;
		if let Err(err) = Self::apply_update(&txn, &existing, input, links).await {
			let _ = txn.rollback().await;
			return Err(err.into());
		}
		txn.commit().await?;
		info!(association_id = %id, "updated association");

		self.get(id, lang).await?.ok_or(AssociationError::NotFound(id))
	}

	async fn apply_update(
		txn: &DatabaseTransaction,
		existing: &association::Model,
		input: AssociationInput,
		links: &DesiredLinks,
	) -> Result<(), sea_orm::DbErr> {
		let current = association_unit_type::Entity::find()
			.filter(association_unit_type::Column::AssociationId.eq(existing.id))
			.all(txn)
			.await?;
		let current_pairs: Vec<(Uuid, Uuid)> =
			current.iter().map(|link| (link.unit_type_id, link.id)).collect();

		let diff = diff_keys(&current_pairs, links.keys().copied());
		debug!(
			association_id = %existing.id,
			create = diff.to_create.len(),
			delete = diff.to_delete.len(),
			keep = diff.to_keep.len(),
			"unit-type link diff"
		);

		for &unit_type_id in &diff.to_create {
			let service_ids = links.get(&unit_type_id).map(Vec::as_slice).unwrap_or(&[]);
			Self::insert_link_subtree(txn, existing.id, unit_type_id, service_ids).await?;
		}

		for &(_, link_id) in &diff.to_delete {
			Self::delete_link_subtree(txn, link_id).await?;
		}

		for &(unit_type_id, link_id) in &diff.to_keep {
			let desired = links.get(&unit_type_id).map(Vec::as_slice).unwrap_or(&[]);
			Self::sync_services(txn, link_id, desired).await?;
		}

		association::ActiveModel {
			id: Unchanged(existing.id),
			name: Set(input.name),
			association_type_id: Set(input.association_type_id),
			city_id: Set(input.city_id),
			updated_at: Set(chrono::Utc::now()),
			..Default::default()
		}
		.update(txn)
		.await?;

		Ok(())
	}

	/// Insert the association row and its entire link graph, parents first.
	async fn insert_subtree(
		txn: &DatabaseTransaction,
		input: AssociationInput,
		links: &DesiredLinks,
	) -> Result<Uuid, sea_orm::DbErr> {
		let association = association::ActiveModel {
			name: Set(input.name),
			association_type_id: Set(input.association_type_id),
			city_id: Set(input.city_id),
			..association::ActiveModel::new()
		}
		.insert(txn)
		.await?;

		for (&unit_type_id, service_ids) in links {
			Self::insert_link_subtree(txn, association.id, unit_type_id, service_ids).await?;
		}

		Ok(association.id)
	}

	/// Insert one unit-type link and its service links under it.
	async fn insert_link_subtree(
		txn: &DatabaseTransaction,
		association_id: Uuid,
		unit_type_id: Uuid,
		service_ids: &[Uuid],
	) -> Result<(), sea_orm::DbErr> {
		let link = association_unit_type::ActiveModel {
			association_id: Set(association_id),
			unit_type_id: Set(unit_type_id),
			..association_unit_type::ActiveModel::new()
		}
		.insert(txn)
		.await?;

		for &service_id in service_ids {
			association_unit_type_service::ActiveModel {
				association_unit_type_id: Set(link.id),
				service_id: Set(service_id),
				..association_unit_type_service::ActiveModel::new()
			}
			.insert(txn)
			.await?;
		}

		Ok(())
	}

	/// Delete one unit-type link, service links first.
	async fn delete_link_subtree(
		txn: &DatabaseTransaction,
		link_id: Uuid,
	) -> Result<(), sea_orm::DbErr> {
		association_unit_type_service::Entity::delete_many()
			.filter(association_unit_type_service::Column::AssociationUnitTypeId.eq(link_id))
			.exec(txn)
			.await?;
		association_unit_type::Entity::delete_by_id(link_id)
			.exec(txn)
			.await?;

		Ok(())
	}

	/// Reconcile the service links of one kept unit-type link.
	async fn sync_services(
		txn: &DatabaseTransaction,
		link_id: Uuid,
		desired: &[Uuid],
	) -> Result<(), sea_orm::DbErr> {
		let current = association_unit_type_service::Entity::find()
			.filter(association_unit_type_service::Column::AssociationUnitTypeId.eq(link_id))
			.all(txn)
			.await?;
		let current_pairs: Vec<(Uuid, Uuid)> =
			current.iter().map(|row| (row.service_id, row.id)).collect();

		let diff = diff_keys(&current_pairs, desired.iter().copied());
		if diff.is_noop() {
			return Ok(());
		}

		for &service_id in &diff.to_create {
			association_unit_type_service::ActiveModel {
				association_unit_type_id: Set(link_id),
				service_id: Set(service_id),
				..association_unit_type_service::ActiveModel::new()
			}
			.insert(txn)
			.await?;
		}

		for &(_, row_id) in &diff.to_delete {
			association_unit_type_service::Entity::delete_by_id(row_id)
				.exec(txn)
				.await?;
		}

		Ok(())
	}

	/// Delete an association's entire subtree: service links, then unit-type
	/// links, then the association row, strictly in that order.
	///
	/// Only the integrity guard calls this; it is never exposed on its own.
	pub(super) async fn cascade_delete(
		txn: &DatabaseTransaction,
		association_id: Uuid,
	) -> Result<(), sea_orm::DbErr> {
		let links = association_unit_type::Entity::find()
			.filter(association_unit_type::Column::AssociationId.eq(association_id))
			.all(txn)
			.await?;
		for link in &links {
			Self::delete_link_subtree(txn, link.id).await?;
		}
		association::Entity::delete_by_id(association_id)
			.exec(txn)
			.await?;

		Ok(())
	}
}
