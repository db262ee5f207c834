//! BIP-32 root keys from seeds of any width.
//!
//! The HD primitive only accepts 16, 32 or 64 byte seeds, so the node seed is
//! first widened (or narrowed) to a 64-byte digest of `seed || password`.
//! No path derivation is applied; the keys are the BIP-32 master keys.

use bip32::XPrv;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use keygen_core::constants::WALLET_PUBLIC_KEY_LEN;
use keygen_core::digest::digest;
use keygen_core::encoding::{serde_hex, to_hex};
use keygen_core::types::Seed;

use crate::error::WalletError;

/// BIP-32 master key triple.
///
/// The private key and chain code are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct WalletKeys {
    /// SEC1 compressed secp256k1 public key.
    #[serde(with = "serde_hex")]
    pub public: [u8; WALLET_PUBLIC_KEY_LEN],
    /// secp256k1 secret scalar.
    #[serde(with = "serde_hex")]
    pub private: [u8; 32],
    /// BIP-32 chain code.
    #[serde(with = "serde_hex")]
    pub chain: [u8; 32],
}

impl fmt::Debug for WalletKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKeys")
            .field("public", &to_hex(self.public))
            .finish_non_exhaustive()
    }
}

/// Materialize HD wallet keys for `seed`.
///
/// An empty `password` is the same as no password. Errors from the HD
/// primitive (e.g. an out-of-range master scalar) are returned as
/// [`WalletError::KeyDerivation`] with the primitive's message.
pub fn wallet_from_seed(seed: &Seed, password: &str) -> Result<WalletKeys, WalletError> {
    let hd_seed = Zeroizing::new(digest(&[seed.as_bytes(), password.as_bytes()]));
    let xprv = XPrv::new(&hd_seed[..]).map_err(|e| WalletError::KeyDerivation(e.to_string()))?;

    Ok(WalletKeys {
        public: xprv.public_key().to_bytes(),
        private: xprv.to_bytes(),
        chain: xprv.attrs().chain_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_seed() -> Seed {
        Seed::from_bytes(b"some seed".to_vec()).unwrap()
    }

    #[test]
    fn known_vector_some_seed() {
        let keys = wallet_from_seed(&some_seed(), "").unwrap();
        assert_eq!(
            to_hex(keys.public),
            "02bb80a59fd51ed853285f3b7738b4542f619a52819a04680e5f36c4d76547eec9"
        );
        assert_eq!(
            to_hex(keys.private),
            "733fce1a6a6dc99641590a454532298423c2c65f0df30ca070698d92df55196e"
        );
        assert_eq!(
            to_hex(keys.chain),
            "ef2ccb72ef656cef2256d5fb0a43bbfab04ced88366876580e34e4e57c96c48c"
        );
    }

    #[test]
    fn known_vector_with_password() {
        let keys = wallet_from_seed(&some_seed(), "pass").unwrap();
        assert_eq!(
            to_hex(keys.public),
            "0201239b9f2b940f7ce29d19633f66bcdd46ddb647812921562aa1e402584cb0a6"
        );
        assert_eq!(
            to_hex(keys.private),
            "f551b64d202e4749d86953d4aa2ee5252093fb335853104bfdd44360c3b95032"
        );
        assert_eq!(
            to_hex(keys.chain),
            "d3ad3620177f98d600c173a30b9a57074dede600ded508b487f29359c684c3dc"
        );
    }

    #[test]
    fn derived_node_vector() {
        // transfer-0-1 child of "some seed"
        let seed = Seed::from_hex("4e196c8429a7d19a5a").unwrap();
        let keys = wallet_from_seed(&seed, "").unwrap();
        assert_eq!(
            to_hex(keys.public),
            "02d55fb3f3127f01c4fc06dd7238ad95f934263fe200c7c5ab8b700cca9eec2237"
        );
    }

    #[test]
    fn accepts_short_and_long_seeds() {
        for len in [1usize, 7, 16, 33, 64, 200] {
            let seed = Seed::from_bytes(vec![0x42u8; len]).unwrap();
            assert!(wallet_from_seed(&seed, "").is_ok(), "len {len}");
        }
    }

    #[test]
    fn deterministic() {
        let a = wallet_from_seed(&some_seed(), "x").unwrap();
        let b = wallet_from_seed(&some_seed(), "x").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn debug_hides_private_key() {
        let keys = wallet_from_seed(&some_seed(), "").unwrap();
        let debug = format!("{keys:?}");
        assert!(debug.contains("02bb80a5"));
        assert!(!debug.contains("733fce1a"));
    }

    #[test]
    fn serializes_as_hex_triple() {
        let keys = wallet_from_seed(&some_seed(), "").unwrap();
        let json = serde_json::to_value(&keys).unwrap();
        assert_eq!(
            json["public"],
            "02bb80a59fd51ed853285f3b7738b4542f619a52819a04680e5f36c4d76547eec9"
        );
        let back: WalletKeys = serde_json::from_value(json).unwrap();
        assert_eq!(back, keys);
    }
}
