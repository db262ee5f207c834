//! The Digest Service: SHA-512 over concatenated inputs.
//!
//! Every derivation step hashes `part || part || ...` without separators or
//! length prefixes. Domain separation comes from the salt strings the caller
//! puts between the parts, not from this function.

use sha2::{Digest, Sha512};

use crate::constants::DIGEST_LEN;

/// Hash the concatenation of `parts`.
pub fn digest(parts: &[&[u8]]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}
