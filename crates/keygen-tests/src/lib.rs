//! Integration test suite for keygen.
//!
//! Golden vectors for the full derivation tree, plus property tests over
//! derivation, key materialization and sharding.

pub mod helpers;
