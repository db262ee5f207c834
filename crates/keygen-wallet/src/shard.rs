//! 2-of-3 XOR secret sharding.
//!
//! ```text
//! r1, r2 <- random, |r| = |secret|
//! r0      = secret ^ r1 ^ r2
//! shards  = [(r0, r1), (r0, r2), (r1, r2)]
//! ```
//!
//! Any two shards expose all three pads; XOR of the three distinct pads is
//! the secret. A single shard is two uniformly random strings.
//!
//! Combination deduplicates pads by value, not by position, so pads are
//! redrawn until `r0`, `r1` and `r2` are pairwise distinct.

use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use keygen_core::constants::{MIN_SHARD_SECRET_LEN, SHARD_COUNT, SHARD_THRESHOLD};
use keygen_core::encoding::{from_hex, to_hex};

use crate::error::WalletError;

/// One shard: an ordered pair of equal-length pads.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Shard {
    first: Vec<u8>,
    second: Vec<u8>,
}

impl Shard {
    /// Build a shard from two pads of the same non-zero length.
    pub fn new(first: Vec<u8>, second: Vec<u8>) -> Result<Self, WalletError> {
        if first.is_empty() || first.len() != second.len() {
            return Err(WalletError::MalformedShard(format!(
                "pad lengths {} and {}",
                first.len(),
                second.len()
            )));
        }
        Ok(Self { first, second })
    }

    /// Split `first || second` back into a shard.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(WalletError::MalformedShard(format!(
                "length {} is not two equal pads",
                bytes.len()
            )));
        }
        let (first, second) = bytes.split_at(bytes.len() / 2);
        Self::new(first.to_vec(), second.to_vec())
    }

    pub fn from_hex(s: &str) -> Result<Self, WalletError> {
        let bytes = Zeroizing::new(from_hex(s)?);
        Self::from_bytes(&bytes)
    }

    /// `first || second`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.first.len() * 2);
        out.extend_from_slice(&self.first);
        out.extend_from_slice(&self.second);
        out
    }

    pub fn to_hex(&self) -> String {
        to_hex(Zeroizing::new(self.to_bytes()).as_slice())
    }

    /// Both pads, in order.
    pub fn pads(&self) -> [&[u8]; 2] {
        [&self.first, &self.second]
    }

    /// Length of the sharded secret (one pad), in bytes.
    pub fn secret_len(&self) -> usize {
        self.first.len()
    }
}

impl fmt::Debug for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shard")
            .field("secret_len", &self.first.len())
            .field("pads", &"[REDACTED]")
            .finish()
    }
}

/// Split `secret` into three shards using the OS RNG.
pub fn shard(secret: &[u8]) -> Result<[Shard; SHARD_COUNT], WalletError> {
    shard_with_rng(secret, &mut rand::rngs::OsRng)
}

/// Split `secret` into three shards, drawing pads from `rng`.
pub fn shard_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    rng: &mut R,
) -> Result<[Shard; SHARD_COUNT], WalletError> {
    if secret.is_empty() {
        return Err(WalletError::EmptySecret);
    }

    let mut r1 = Zeroizing::new(vec![0u8; secret.len()]);
    let mut r2 = Zeroizing::new(vec![0u8; secret.len()]);
    let mut r0 = Zeroizing::new(vec![0u8; secret.len()]);
    let mut draws = 0u32;
    loop {
        rng.fill_bytes(&mut r1);
        rng.fill_bytes(&mut r2);
        for (i, out) in r0.iter_mut().enumerate() {
            *out = secret[i] ^ r1[i] ^ r2[i];
        }
        draws += 1;
        if *r0 != *r1 && *r0 != *r2 && *r1 != *r2 {
            break;
        }
    }
    debug!(len = secret.len(), draws, "shard: split secret");

    Ok([
        Shard::new(r0.to_vec(), r1.to_vec())?,
        Shard::new(r0.to_vec(), r2.to_vec())?,
        Shard::new(r1.to_vec(), r2.to_vec())?,
    ])
}

/// Recover the secret from any two or three shards of one set.
///
/// Missing shards are `None`. Fails with
/// [`WalletError::InsufficientShards`] when fewer than two distinct shards
/// are present.
pub fn combine(shards: &[Option<Shard>]) -> Result<Vec<u8>, WalletError> {
    let mut present: Vec<&Shard> = Vec::with_capacity(SHARD_COUNT);
    for s in shards.iter().flatten() {
        if !present.contains(&s) {
            present.push(s);
        }
    }
    if present.len() < SHARD_THRESHOLD {
        return Err(WalletError::InsufficientShards {
            have: present.len(),
        });
    }

    let expected = present[0].secret_len();
    if let Some(bad) = present.iter().find(|s| s.secret_len() != expected) {
        return Err(WalletError::ShardLengthMismatch {
            expected,
            got: bad.secret_len(),
        });
    }

    let mut distinct: Vec<&[u8]> = Vec::with_capacity(SHARD_COUNT);
    for pad in present.iter().flat_map(|s| s.pads()) {
        if !distinct.contains(&pad) {
            distinct.push(pad);
        }
    }
    if distinct.len() != SHARD_COUNT {
        return Err(WalletError::MalformedShard(format!(
            "expected {SHARD_COUNT} distinct pads, found {}",
            distinct.len()
        )));
    }

    let mut secret = vec![0u8; expected];
    for pad in distinct {
        for (out, b) in secret.iter_mut().zip(pad) {
            *out ^= b;
        }
    }
    debug!(shards = present.len(), len = expected, "shard: combined secret");
    Ok(secret)
}

/// Hex interface to [`shard`].
///
/// Secrets shorter than [`MIN_SHARD_SECRET_LEN`] bytes are returned as a
/// single-element set holding the (lower-cased) input; check the set's
/// length before assuming 2-of-3 recovery applies.
pub fn shard_hex(secret_hex: &str) -> Result<Vec<String>, WalletError> {
    let secret = Zeroizing::new(from_hex(secret_hex)?);
    if secret.is_empty() {
        return Err(WalletError::EmptySecret);
    }
    if secret.len() < MIN_SHARD_SECRET_LEN {
        debug!(len = secret.len(), "shard: secret too short, passing through");
        return Ok(vec![to_hex(secret.as_slice())]);
    }
    Ok(shard(&secret)?.iter().map(Shard::to_hex).collect())
}

/// Hex interface to [`combine`].
pub fn combine_hex(shards: &[Option<&str>]) -> Result<String, WalletError> {
    let parsed = shards
        .iter()
        .map(|s| s.map(Shard::from_hex).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    let secret = Zeroizing::new(combine(&parsed)?);
    Ok(to_hex(secret.as_slice()))
}
