//! # keygen-wallet: deterministic identity tree and seed sharding.
//!
//! Derives a full hierarchy of typed child seeds from one root seed,
//! materializes them as HD wallet keys or network (crypt/auth) keys, and
//! backs the root up with a 2-of-3 XOR sharding scheme.
//!
//! # Modules
//!
//! - [`error`]: `WalletError` enum
//! - [`derive`]: Salted child-seed derivation
//! - [`keys`]: BIP-32 root keys from any seed
//! - [`network`]: Ed25519 crypt/auth keys in Urbit byte order
//! - [`wallet`]: Full wallet assembly and single-branch derivation
//! - [`shard`]: 2-of-3 secret sharding
//! - [`mnemonic`]: BIP-39 backup of seeds

pub mod derive;
pub mod error;
pub mod keys;
pub mod mnemonic;
pub mod network;
pub mod shard;
pub mod wallet;

// Re-exports for convenient access
pub use derive::derive_child_seed;
pub use error::WalletError;
pub use keys::{wallet_from_seed, WalletKeys};
pub use mnemonic::{mnemonic_to_seed, seed_to_mnemonic};
pub use network::{urbit_keys_from_seed, NetworkKeys, SignatureKeys};
pub use shard::{combine, combine_hex, shard, shard_hex, Shard};
pub use wallet::{assemble_wallet, derive_node, Node, NodeKeys, NodeMeta, Wallet, WalletConfig};
