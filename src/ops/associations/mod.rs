//! Association operations
//!
//! Reconciliation of the nested link graph (association → unit-type links →
//! service links), guarded bulk deletion, and the localized read projection.
//! All writes go through [`AssociationService`], one transaction per call.

use sea_orm::DatabaseConnection;

pub mod diff;
pub mod query;
pub mod remove;
pub mod sync;

pub use diff::{diff_keys, DesiredLinks, LinkDiff};
pub use query::{AssociationView, FormData, ListFilter, Paginated};
pub use sync::AssociationInput;

/// Entry point for association operations.
///
/// Constructed once with the database handle; no lazily-resolved sibling
/// repositories. Clone is cheap — the connection is an internal pool handle.
#[derive(Clone)]
pub struct AssociationService {
	db: DatabaseConnection,
}

impl AssociationService {
	pub fn new(db: DatabaseConnection) -> Self {
		Self { db }
	}
}
