//! Domain operations

pub mod associations;
