//! Database entities

pub mod association;
pub mod association_type;
pub mod association_unit_type;
pub mod association_unit_type_service;
pub mod building;
pub mod service;
pub mod translation;
pub mod unit_type;
