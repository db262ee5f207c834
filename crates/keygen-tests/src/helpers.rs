//! Shared helpers for integration and property tests.

use keygen_core::types::Seed;
use keygen_wallet::Shard;

/// The nine-byte root seed behind the golden vectors.
pub fn some_seed() -> Seed {
    seed_from(b"some seed")
}

/// Seed from raw bytes. Panics on empty input.
pub fn seed_from(bytes: &[u8]) -> Seed {
    Seed::from_bytes(bytes.to_vec()).expect("test seed must be non-empty")
}

/// `len` copies of `byte`.
pub fn seed_of(len: usize, byte: u8) -> Seed {
    seed_from(&vec![byte; len])
}

/// Keep the shards whose flag is set, in place.
pub fn keep(set: &[Shard; 3], flags: [bool; 3]) -> Vec<Option<Shard>> {
    set.iter()
        .zip(flags)
        .map(|(s, k)| k.then(|| s.clone()))
        .collect()
}

/// Every way to pick two of three shards.
pub const PAIRS: [[bool; 3]; 3] = [[true, true, false], [true, false, true], [false, true, true]];
