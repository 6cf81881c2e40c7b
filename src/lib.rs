//! # hoa-core
//!
//! Data tier for a homeowners-association registry. An association carries a
//! nested many-to-many-through graph: unit-type links, each of which carries
//! service links. Callers hand the engine the desired shape of that graph and
//! the engine reconciles it against the database — computing the minimal set
//! of inserts and deletes and applying them inside one transaction — while a
//! referential-integrity guard keeps associations with dependent buildings
//! from being bulk-deleted.

pub mod common;
pub mod infra;
pub mod ops;

pub use common::errors::{CoreError, Result};
pub use ops::associations::AssociationService;
