//! Shared types used across the core

pub mod errors;
