//! Network (crypt/auth) keys in Urbit byte order.
//!
//! # Algorithm
//!
//! ```text
//! h     = SHA-512(reverse(seed || password))
//! auth  = Ed25519(h[0..32])
//! crypt = Ed25519(h[32..64])
//! out   = reverse(each private half and public key)
//! ```
//!
//! Urbit treats byte strings as little-endian integers and prints
//! them big-endian, hence the reversal on both sides. Dropping either
//! reversal still yields well-formed 32-byte keys, just the wrong ones.

use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use keygen_core::constants::{NETWORK_HASH_LEN, SIGNATURE_KEY_LEN};
use keygen_core::encoding::{serde_hex, to_hex};
use keygen_core::types::Seed;

/// Ed25519 keypair in output byte order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SignatureKeys {
    #[serde(with = "serde_hex")]
    pub public: [u8; SIGNATURE_KEY_LEN],
    #[serde(with = "serde_hex")]
    pub private: [u8; SIGNATURE_KEY_LEN],
}

impl fmt::Debug for SignatureKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureKeys")
            .field("public", &to_hex(self.public))
            .finish_non_exhaustive()
    }
}

/// Encryption and authentication keypairs of one network identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkKeys {
    pub crypt: SignatureKeys,
    pub auth: SignatureKeys,
}

/// Reverse byte order.
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Input stage: SHA-512 of `reverse(seed || password)`.
pub fn network_hash(seed: &Seed, password: &str) -> [u8; NETWORK_HASH_LEN] {
    let mut joined = Zeroizing::new(Vec::with_capacity(seed.len() + password.len()));
    joined.extend_from_slice(seed.as_bytes());
    joined.extend_from_slice(password.as_bytes());
    let reversed = Zeroizing::new(reverse_bytes(&joined));

    let mut out = [0u8; NETWORK_HASH_LEN];
    out.copy_from_slice(&Sha512::digest(&reversed[..]));
    out
}

/// Output stage: expand a 32-byte half into a keypair, then reverse both
/// byte strings into output order.
pub fn signature_keys_from_half(half: &[u8; SIGNATURE_KEY_LEN]) -> SignatureKeys {
    let signing_key = SigningKey::from_bytes(half);
    SignatureKeys {
        public: reversed_array(&signing_key.verifying_key().to_bytes()),
        private: reversed_array(&signing_key.to_bytes()),
    }
}

fn reversed_array(bytes: &[u8; SIGNATURE_KEY_LEN]) -> [u8; SIGNATURE_KEY_LEN] {
    let mut out = *bytes;
    out.reverse();
    out
}

/// Derive the crypt/auth keypairs for a network seed.
///
/// An empty `password` is the same as no password.
pub fn urbit_keys_from_seed(seed: &Seed, password: &str) -> NetworkKeys {
    let hash = Zeroizing::new(network_hash(seed, password));
    let (auth_half, crypt_half) = hash.split_at(SIGNATURE_KEY_LEN);

    let mut auth = [0u8; SIGNATURE_KEY_LEN];
    auth.copy_from_slice(auth_half);
    let mut crypt = [0u8; SIGNATURE_KEY_LEN];
    crypt.copy_from_slice(crypt_half);
    let (auth, crypt) = (Zeroizing::new(auth), Zeroizing::new(crypt));

    NetworkKeys {
        crypt: signature_keys_from_half(&crypt),
        auth: signature_keys_from_half(&auth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keygen_core::encoding::from_hex_array;

    fn some_seed() -> Seed {
        Seed::from_bytes(b"some seed".to_vec()).unwrap()
    }

    #[test]
    fn reverse_bytes_reverses() {
        assert_eq!(reverse_bytes(&[1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(reverse_bytes(&[]), Vec::<u8>::new());
        assert_eq!(reverse_bytes(&reverse_bytes(b"abc")), b"abc".to_vec());
    }

    #[test]
    fn hash_covers_reversed_input() {
        let hash = network_hash(&some_seed(), "");
        assert_eq!(hash.to_vec(), Sha512::digest(b"dees emos").to_vec());
        assert_ne!(hash.to_vec(), Sha512::digest(b"some seed").to_vec());
    }

    #[test]
    fn password_appended_before_reversal() {
        let hash = network_hash(&some_seed(), "pass");
        assert_eq!(hash.to_vec(), Sha512::digest(b"ssapdees emos").to_vec());
    }

    #[test]
    fn output_stage_reverses_keys() {
        let half: [u8; 32] = from_hex_array(
            "1e3971489f3756d2c6358ef798343ea82b5f4ad322b6d45df2fa0606029bef15",
        )
        .unwrap();
        let keys = signature_keys_from_half(&half);
        assert_eq!(
            to_hex(keys.private),
            "15ef9b020606faf25dd4b622d34a5f2ba83e3498f78e35c6d256379f4871391e"
        );
        assert_eq!(
            to_hex(keys.public),
            "220c0db4f436d2532f0fddb56555bf6926d6bcfb073d790b8f1e9c4258ebb43e"
        );
    }

    #[test]
    fn known_vector_some_seed() {
        let keys = urbit_keys_from_seed(&some_seed(), "");
        assert_eq!(
            to_hex(keys.crypt.private),
            "15ef9b020606faf25dd4b622d34a5f2ba83e3498f78e35c6d256379f4871391e"
        );
        assert_eq!(
            to_hex(keys.crypt.public),
            "220c0db4f436d2532f0fddb56555bf6926d6bcfb073d790b8f1e9c4258ebb43e"
        );
        assert_eq!(
            to_hex(keys.auth.private),
            "fd816b63558f3f4ee5eafedbabe56293ee1f64e837f081724bfdd47d6e4b9815"
        );
        assert_eq!(
            to_hex(keys.auth.public),
            "bbba375a6dd28dc9e44d6a98c75edeb699c10d78e92ccad78c892efa2466c666"
        );
    }

    #[test]
    fn known_vector_with_password() {
        let keys = urbit_keys_from_seed(&some_seed(), "pass");
        assert_eq!(
            to_hex(keys.crypt.private),
            "e3ec05249eaaffbfca918dd9048a03656b68e5685f9a2452850917e2b34996ed"
        );
        assert_eq!(
            to_hex(keys.crypt.public),
            "edb31a2d442b50d37983ac06ab7c5d976a71eca84ed16573bf6e258b082ea9f9"
        );
        assert_eq!(
            to_hex(keys.auth.private),
            "5dee3371f15af6dfdd4c8c50037c3f3350e26440af3257ed62f9da9445e9946b"
        );
        assert_eq!(
            to_hex(keys.auth.public),
            "9b4931daf2c0cccd34df0772f70eaaa9b5b341c46e1a8cbf063b7cdd25917e13"
        );
    }

    #[test]
    fn crypt_and_auth_not_swapped() {
        let keys = urbit_keys_from_seed(&some_seed(), "");
        let hash = network_hash(&some_seed(), "");
        let mut auth_half = [0u8; 32];
        auth_half.copy_from_slice(&hash[..32]);
        assert_eq!(keys.auth, signature_keys_from_half(&auth_half));
        assert_ne!(keys.crypt, keys.auth);
    }

    #[test]
    fn private_is_reversed_half() {
        let keys = urbit_keys_from_seed(&some_seed(), "");
        let hash = network_hash(&some_seed(), "");
        assert_eq!(reverse_bytes(&keys.crypt.private), hash[32..].to_vec());
        assert_eq!(reverse_bytes(&keys.auth.private), hash[..32].to_vec());
    }

    #[test]
    fn serializes_as_nested_hex() {
        let keys = urbit_keys_from_seed(&some_seed(), "");
        let json = serde_json::to_value(&keys).unwrap();
        assert_eq!(
            json["auth"]["public"],
            "bbba375a6dd28dc9e44d6a98c75edeb699c10d78e92ccad78c892efa2466c666"
        );
        assert_eq!(json["crypt"].as_object().unwrap().len(), 2);
    }
}
