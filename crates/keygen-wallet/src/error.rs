//! Wallet error types.

use keygen_core::error::{EncodingError, SeedError, StretchError};
use keygen_core::types::Purpose;
use thiserror::Error;

/// Errors that can occur while deriving, assembling or sharding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Fewer shards than the reconstruction threshold.
    #[error("insufficient shards: have {have}, need 2 distinct")]
    InsufficientShards {
        /// Number of usable shards supplied.
        have: usize,
    },

    /// Supplied shards do not all have the same length.
    #[error("shard length mismatch: {expected} != {got}")]
    ShardLengthMismatch {
        /// Length of the first shard, in bytes.
        expected: usize,
        /// Length of the offending shard, in bytes.
        got: usize,
    },

    /// A shard's byte length is not two equal pads.
    #[error("malformed shard: {0}")]
    MalformedShard(String),

    /// Nothing to shard.
    #[error("cannot shard an empty secret")]
    EmptySecret,

    /// A per-target purpose was requested without a target.
    #[error("{0} node requires a target")]
    MissingTarget(Purpose),

    /// The same target was listed twice while uniqueness was required.
    #[error("duplicate target: {0}")]
    DuplicateTarget(u32),

    /// Failure in the HD wallet or signature key primitive.
    #[error("key derivation: {0}")]
    KeyDerivation(String),

    /// Serialization error.
    #[error("serialization: {0}")]
    Serialization(String),

    /// Invalid BIP-39 mnemonic phrase or unsupported seed width.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Hex encoding error from keygen-core.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Seed construction error from keygen-core.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Entropy stretch error from keygen-core.
    #[error(transparent)]
    Stretch(#[from] StretchError),
}
