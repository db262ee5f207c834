//! Protocol constants shared by every derivation stage.

/// Output width of the Digest Service (SHA-512).
pub const DIGEST_LEN: usize = 64;

/// Output width of the network-identity hash.
pub const NETWORK_HASH_LEN: usize = 64;

/// Length of each Ed25519 seed half and public key.
pub const SIGNATURE_KEY_LEN: usize = 32;

/// Compressed secp256k1 public key length.
pub const WALLET_PUBLIC_KEY_LEN: usize = 33;

/// Fixed salt mixed into every entropy stretch.
///
/// Changing this value changes every root seed produced from a passphrase.
pub const STRETCH_SALT: &[u8] = b"urbitkeygen";

/// Default Argon2 memory cost in KiB.
pub const STRETCH_MEMORY_KIB: u32 = 512_000;

/// Default Argon2 pass count.
pub const STRETCH_ITERATIONS: u32 = 1;

/// Default Argon2 lane count.
pub const STRETCH_PARALLELISM: u32 = 4;

/// Default stretched seed width in bytes.
pub const DEFAULT_SEED_LEN: usize = 32;

/// Secrets shorter than this many bytes are not split by the hex shard interface.
pub const MIN_SHARD_SECRET_LEN: usize = 16;

/// Number of shards in a shard set.
pub const SHARD_COUNT: usize = 3;

/// Minimum number of shards needed to reconstruct a secret.
pub const SHARD_THRESHOLD: usize = 2;
