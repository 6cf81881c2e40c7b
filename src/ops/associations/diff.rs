//! One-level diff of a keyed link collection
//!
//! Pure set arithmetic between the persisted links at one level of the graph
//! and the caller's desired key set. No I/O; the synchronizer applies the
//! result inside its transaction, once for unit types and once per kept
//! unit type for its services.

use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Caller-supplied target shape of an association's nested links:
/// unit type id → the services attached under it.
pub type DesiredLinks = BTreeMap<Uuid, Vec<Uuid>>;

/// Partition of one level of links into the writes needed to reach the
/// desired state. The three parts are disjoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkDiff {
	/// Keys present only in the desired state.
	pub to_create: Vec<Uuid>,
	/// (key, row id) pairs present only in the persisted state.
	pub to_delete: Vec<(Uuid, Uuid)>,
	/// (key, row id) pairs present in both states.
	pub to_keep: Vec<(Uuid, Uuid)>,
}

impl LinkDiff {
	/// True when the desired state already matches the persisted one.
	pub fn is_noop(&self) -> bool {
		self.to_create.is_empty() && self.to_delete.is_empty()
	}
}

/// Compute the create/delete/keep partition for one level of the graph.
///
/// `current` is the persisted state as (key, row id) pairs; `desired` is the
/// target key set (duplicates collapse). Row ids travel with the delete and
/// keep entries so the caller can issue deletes and child lookups without
/// re-querying.
pub fn diff_keys<I>(current: &[(Uuid, Uuid)], desired: I) -> LinkDiff
where
	I: IntoIterator<Item = Uuid>,
{
	let desired: BTreeSet<Uuid> = desired.into_iter().collect();
	let current_keys: BTreeSet<Uuid> = current.iter().map(|&(key, _)| key).collect();

	LinkDiff {
		to_create: desired
			.iter()
			.copied()
			.filter(|key| !current_keys.contains(key))
			.collect(),
		to_delete: current
			.iter()
			.copied()
			.filter(|(key, _)| !desired.contains(key))
			.collect(),
		to_keep: current
			.iter()
			.copied()
			.filter(|(key, _)| desired.contains(key))
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn uuid(n: u128) -> Uuid {
		Uuid::from_u128(n)
	}

	#[test]
	fn partitions_are_disjoint_and_cover_both_sides() {
		let (u1, u2, u3) = (uuid(1), uuid(2), uuid(3));
		let (r1, r2) = (uuid(101), uuid(102));

		// current: {u1, u2}, desired: {u1, u3}
		let diff = diff_keys(&[(u1, r1), (u2, r2)], [u1, u3]);

		assert_eq!(diff.to_create, vec![u3]);
		assert_eq!(diff.to_delete, vec![(u2, r2)]);
		assert_eq!(diff.to_keep, vec![(u1, r1)]);
	}

	#[test]
	fn nested_two_level_example() {
		// current unit types {U1: [S1, S2], U2: [S3]},
		// desired {U1: [S2, S3], U3: [S1]}
		let (ut1, ut2, ut3) = (uuid(1), uuid(2), uuid(3));
		let (s1, s2, s3) = (uuid(11), uuid(12), uuid(13));
		let (row1, row2) = (uuid(101), uuid(102));

		let ut_diff = diff_keys(&[(ut1, row1), (ut2, row2)], [ut1, ut3]);
		assert_eq!(ut_diff.to_create, vec![ut3]);
		assert_eq!(ut_diff.to_delete, vec![(ut2, row2)]);
		assert_eq!(ut_diff.to_keep, vec![(ut1, row1)]);

		// service-level diff for the kept U1
		let (srv_row1, srv_row2) = (uuid(201), uuid(202));
		let srv_diff = diff_keys(&[(s1, srv_row1), (s2, srv_row2)], [s2, s3]);
		assert_eq!(srv_diff.to_create, vec![s3]);
		assert_eq!(srv_diff.to_delete, vec![(s1, srv_row1)]);
		assert_eq!(srv_diff.to_keep, vec![(s2, srv_row2)]);
	}

	#[test]
	fn identical_states_are_a_noop() {
		let (u1, r1) = (uuid(1), uuid(101));
		let diff = diff_keys(&[(u1, r1)], [u1]);

		assert!(diff.is_noop());
		assert_eq!(diff.to_keep, vec![(u1, r1)]);
	}

	#[test]
	fn empty_current_creates_everything() {
		let diff = diff_keys(&[], [uuid(1), uuid(2)]);
		assert_eq!(diff.to_create, vec![uuid(1), uuid(2)]);
		assert!(diff.to_delete.is_empty() && diff.to_keep.is_empty());
	}

	#[test]
	fn empty_desired_deletes_everything() {
		let (u1, r1) = (uuid(1), uuid(101));
		let diff = diff_keys(&[(u1, r1)], []);
		assert_eq!(diff.to_delete, vec![(u1, r1)]);
		assert!(diff.to_create.is_empty() && diff.to_keep.is_empty());
	}

	#[test]
	fn duplicate_desired_keys_collapse() {
		let diff = diff_keys(&[], [uuid(1), uuid(1)]);
		assert_eq!(diff.to_create, vec![uuid(1)]);
	}
}
