//! Value types for the derivation tree.
//!
//! All types here are immutable once built. A [`Seed`] is non-empty by
//! construction, which keeps every derivation function total.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding;
use crate::error::{EncodingError, SeedError};

/// Opaque secret bytes of any non-zero length.
///
/// Secret material is zeroized on drop. Serializes as a lower-case hex
/// string.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: Vec<u8>,
}

impl Seed {
    /// Wrap raw bytes. Fails on empty input.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, SeedError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self { bytes })
    }

    /// Parse a hex-encoded seed.
    pub fn from_hex(s: &str) -> Result<Self, EncodingError> {
        let bytes = encoding::from_hex(s)?;
        if bytes.is_empty() {
            return Err(EncodingError::InvalidLength {
                expected: 1,
                got: 0,
            });
        }
        Ok(Self { bytes })
    }

    /// Draw `len` random bytes from the OS cryptographic RNG.
    pub fn generate(len: usize) -> Result<Self, SeedError> {
        use rand::RngCore;
        let mut bytes = vec![0u8; len];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self::from_bytes(bytes)
    }

    /// Raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Seed length in bytes (never zero).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-case hex form.
    pub fn to_hex(&self) -> String {
        encoding::to_hex(&self.bytes)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Branch label of the derivation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// The root identity; its seed is the root seed itself.
    Ownership,
    /// Per-target transfer proxy.
    Transfer,
    /// Per-target spawn proxy.
    Spawn,
    /// Delegated voting/signing identity.
    Delegate,
    /// Management proxy; parent of the network branch.
    #[serde(rename = "management")]
    Manage,
    /// Per-target network (crypt/auth) identity.
    Network,
}

impl Purpose {
    /// Every purpose, in wallet order.
    pub const ALL: [Purpose; 6] = [
        Purpose::Ownership,
        Purpose::Manage,
        Purpose::Delegate,
        Purpose::Transfer,
        Purpose::Spawn,
        Purpose::Network,
    ];

    /// Label used in derivation salts and serialized metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Ownership => "ownership",
            Purpose::Transfer => "transfer",
            Purpose::Spawn => "spawn",
            Purpose::Delegate => "delegate",
            Purpose::Manage => "management",
            Purpose::Network => "network",
        }
    }

    /// Whether nodes of this purpose are scoped to a target index.
    pub fn is_targeted(self) -> bool {
        matches!(self, Purpose::Transfer | Purpose::Spawn | Purpose::Network)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Revision number for every purpose.
///
/// There is no ambient default table: callers build one explicitly, either
/// field by field or from [`Revisions::default`] (all zero) plus
/// [`Revisions::with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Revisions {
    pub ownership: u32,
    pub transfer: u32,
    pub spawn: u32,
    pub delegate: u32,
    pub manage: u32,
    pub network: u32,
}

impl Revisions {
    /// Revision for a purpose.
    pub fn get(&self, purpose: Purpose) -> u32 {
        match purpose {
            Purpose::Ownership => self.ownership,
            Purpose::Transfer => self.transfer,
            Purpose::Spawn => self.spawn,
            Purpose::Delegate => self.delegate,
            Purpose::Manage => self.manage,
            Purpose::Network => self.network,
        }
    }

    /// Copy of this table with one purpose's revision replaced.
    pub fn with(mut self, purpose: Purpose, revision: u32) -> Self {
        let slot = match purpose {
            Purpose::Ownership => &mut self.ownership,
            Purpose::Transfer => &mut self.transfer,
            Purpose::Spawn => &mut self.spawn,
            Purpose::Delegate => &mut self.delegate,
            Purpose::Manage => &mut self.manage,
            Purpose::Network => &mut self.network,
        };
        *slot = revision;
        self
    }
}

/// Labeled context for one derivation step.
///
/// Only used to build the canonical salt; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationContext {
    pub purpose: Purpose,
    pub revision: u32,
    pub target: Option<u32>,
    /// Empty string means "no password".
    pub password: String,
}

impl DerivationContext {
    /// Context with revision 0, no target and no password.
    pub fn new(purpose: Purpose) -> Self {
        Self {
            purpose,
            revision: 0,
            target: None,
            password: String::new(),
        }
    }

    pub fn revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }

    pub fn target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Canonical salt: `purpose-revision[-target]`.
    pub fn salt(&self) -> String {
        match self.target {
            Some(target) => format!("{}-{}-{}", self.purpose, self.revision, target),
            None => format!("{}-{}", self.purpose, self.revision),
        }
    }
}
