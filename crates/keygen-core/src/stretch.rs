//! The Entropy Stretcher: Argon2id over low-entropy input.
//!
//! Turns a passphrase-like input into a root [`Seed`] of configurable width.
//! This is the one expensive operation in the crate; its memory and time
//! costs come from [`StretchConfig`], never from the input.

use argon2::{Algorithm, Argon2, Params, Version};
use tracing::debug;

use crate::constants::{
    DEFAULT_SEED_LEN, STRETCH_ITERATIONS, STRETCH_MEMORY_KIB, STRETCH_PARALLELISM, STRETCH_SALT,
};
use crate::error::StretchError;
use crate::types::Seed;

/// Cost parameters for the entropy stretch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StretchConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
    /// Width of the produced seed in bytes.
    pub output_len: usize,
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            memory_kib: STRETCH_MEMORY_KIB,
            iterations: STRETCH_ITERATIONS,
            parallelism: STRETCH_PARALLELISM,
            output_len: DEFAULT_SEED_LEN,
        }
    }
}

impl StretchConfig {
    /// Low-cost preset for tests and benchmarks. Not for real secrets.
    pub fn fast() -> Self {
        Self {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
            ..Self::default()
        }
    }

    /// Same costs, different output width.
    pub fn with_output_len(self, output_len: usize) -> Self {
        Self { output_len, ..self }
    }

    fn params(&self) -> Result<Params, StretchError> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| StretchError::InvalidParams(e.to_string()))
    }
}

/// Stretch `input` into a seed of `config.output_len` bytes.
///
/// Deterministic for a fixed input and config. Parameter errors from the
/// underlying Argon2 implementation are returned unchanged in meaning.
pub fn stretch(input: &[u8], config: &StretchConfig) -> Result<Seed, StretchError> {
    let params = config.params()?;
    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    debug!(
        memory_kib = config.memory_kib,
        iterations = config.iterations,
        output_len = config.output_len,
        "stretch: deriving seed"
    );

    let mut out = vec![0u8; config.output_len];
    argon
        .hash_password_into(input, STRETCH_SALT, &mut out)
        .map_err(|e| StretchError::Hashing(e.to_string()))?;
    Seed::from_bytes(out).map_err(|e| StretchError::InvalidParams(e.to_string()))
}
