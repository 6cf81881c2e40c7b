//! Unified error handling for the core

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for core operations
#[derive(Error, Debug)]
pub enum CoreError {
	#[error("Database error: {0}")]
	Database(#[from] DbErr),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Association(#[from] AssociationError),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Other error: {0}")]
	Other(#[from] anyhow::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the association reconciliation engine.
///
/// Persistence failures are carried as the original [`DbErr`], never
/// transformed: the transaction has already been rolled back by the time the
/// error reaches the caller, and the caller gets exactly what the database
/// reported (foreign-key violations included).
#[derive(Error, Debug)]
pub enum AssociationError {
	#[error("association {0} not found")]
	NotFound(Uuid),

	#[error(transparent)]
	DependencyConflict(#[from] DependencyConflict),

	#[error("Database error: {0}")]
	Database(#[from] DbErr),
}

/// An association the integrity guard refused to delete, resolved to its
/// display name so callers can act on the conflict without re-querying.
#[derive(Debug, Clone, Serialize)]
pub struct BlockedAssociation {
	pub id: Uuid,
	pub name: String,
}

/// Bulk deletion was refused for one or more associations that still have
/// buildings referencing them.
///
/// The `Display` message is the JSON-encoded array of blocked display names;
/// the API layer forwards it verbatim together with `code` and `status_code`.
#[derive(Debug, Clone)]
pub struct DependencyConflict {
	pub code: &'static str,
	pub status_code: u16,
	pub blocked: Vec<BlockedAssociation>,
	/// Ids whose subtrees were deleted before the conflict was reported.
	/// The admitted batch commits even when other ids are blocked.
	pub deleted: Vec<Uuid>,
}

impl DependencyConflict {
	pub const CODE: &'static str = "HOAS_HAS_BUILDINGS";
	pub const STATUS_CODE: u16 = 422;

	pub fn new(blocked: Vec<BlockedAssociation>, deleted: Vec<Uuid>) -> Self {
		Self {
			code: Self::CODE,
			status_code: Self::STATUS_CODE,
			blocked,
			deleted,
		}
	}

	/// Blocked display names in request order.
	pub fn blocked_names(&self) -> Vec<&str> {
		self.blocked.iter().map(|b| b.name.as_str()).collect()
	}
}

impl std::fmt::Display for DependencyConflict {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match serde_json::to_string(&self.blocked_names()) {
			Ok(json) => f.write_str(&json),
			Err(_) => write!(f, "{:?}", self.blocked_names()),
		}
	}
}

impl std::error::Error for DependencyConflict {}
