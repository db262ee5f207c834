//! Salted child-seed derivation.
//!
//! A child seed is `digest(parent || salt || password)` truncated to the
//! parent's length, so seeds keep their width at every depth of the tree.
//! Parents wider than the digest yield digest-width children.

use keygen_core::constants::DIGEST_LEN;
use keygen_core::digest::digest;
use keygen_core::types::{DerivationContext, Seed};

/// Derive the child seed of `parent` under `ctx`.
///
/// Pure and total: identical inputs always give identical output.
pub fn derive_child_seed(parent: &Seed, ctx: &DerivationContext) -> Seed {
    let salt = ctx.salt();
    let hash = digest(&[parent.as_bytes(), salt.as_bytes(), ctx.password.as_bytes()]);
    let len = parent.len().min(DIGEST_LEN);
    Seed::from_bytes(hash[..len].to_vec()).expect("parent seed is never empty")
}
