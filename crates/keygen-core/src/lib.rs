//! # keygen-core
//! Seed types and boundary primitives for deterministic identity derivation.

pub mod constants;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod stretch;
pub mod types;
