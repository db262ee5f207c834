//! BIP-39 phrase backup for root seeds.
//!
//! Only seeds of 16 to 32 bytes in steps of 4 have a BIP-39 encoding.

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use keygen_core::types::Seed;

use crate::error::WalletError;

/// Encode a root seed as an English BIP-39 phrase.
///
/// 16 bytes give 12 words, 32 bytes give 24.
pub fn seed_to_mnemonic(seed: &Seed) -> Result<String, WalletError> {
    let m = Mnemonic::from_entropy_in(Language::English, seed.as_bytes()).map_err(|e| {
        WalletError::InvalidMnemonic(format!("{} byte seed: {e}", seed.len()))
    })?;
    Ok(m.to_string())
}

/// Parse an English BIP-39 phrase back into its seed.
///
/// Whitespace is collapsed and case folded before parsing.
pub fn mnemonic_to_seed(phrase: &str) -> Result<Seed, WalletError> {
    let normalized = Zeroizing::new(
        phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
    );
    let m = Mnemonic::parse_in(Language::English, normalized.as_str())
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(Seed::from_bytes(m.to_entropy())?)
}
