//! Integrity guard for bulk deletion
//!
//! Partitions the requested ids into those safe to delete and those a
//! building still references. The admitted batch is cascade-deleted in one
//! transaction; the blocked set is reported afterwards as a typed
//! [`DependencyConflict`], resolved to display names.

use super::AssociationService;
use crate::common::errors::{AssociationError, BlockedAssociation, DependencyConflict};
use crate::infra::db::entities::{association, building};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

impl AssociationService {
	/// Delete the associations in `ids` whose subtrees nothing depends on.
	///
	/// Ids with a referencing building are never touched. The admitted rest
	/// is deleted — full subtree each, one transaction for the whole batch,
	/// so a failure part-way leaves every requested association intact.
	///
	/// Returns the deleted ids, or [`AssociationError::DependencyConflict`]
	/// when any id was blocked. The conflict carries both the blocked
	/// associations' display names and the ids that were deleted before it
	/// was raised: the admitted batch commits regardless.
	pub async fn delete_many(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, AssociationError> {
		let buildings = building::Entity::find()
			.filter(building::Column::AssociationId.is_in(ids.iter().copied()))
			.all(&self.db)
			.await?;
		let blocked_ids: HashSet<Uuid> =
			buildings.iter().map(|b| b.association_id).collect();
		let admitted: Vec<Uuid> = ids
			.iter()
			.copied()
			.filter(|id| !blocked_ids.contains(id))
			.collect();

		let txn = self.db.begin().await?;
		for &id in &admitted {
			if let Err(err) = Self::cascade_delete(&txn, id).await {
				let _ = txn.rollback().await;
				return Err(err.into());
			}
		}
		txn.commit().await?;
		info!(
			deleted = admitted.len(),
			blocked = blocked_ids.len(),
			"bulk association delete"
		);

		if blocked_ids.is_empty() {
			return Ok(admitted);
		}

		let blocked = association::Entity::find()
			.filter(association::Column::Id.is_in(blocked_ids.iter().copied()))
			.all(&self.db)
			.await?
			.into_iter()
			.map(|row| BlockedAssociation {
				id: row.id,
				name: row.name,
			})
			.collect();

		Err(DependencyConflict::new(blocked, admitted).into())
	}
}
