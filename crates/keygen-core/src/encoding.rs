//! Hex encoding, the canonical textual form for bytes crossing the library
//! boundary: lower-case, no prefix, two digits per byte.

use crate::error::EncodingError;

/// Encode bytes as lower-case hex.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string (either case) into bytes.
pub fn from_hex(s: &str) -> Result<Vec<u8>, EncodingError> {
    if s.len() % 2 != 0 {
        return Err(EncodingError::OddLength(s.len()));
    }
    hex::decode(s).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            EncodingError::InvalidCharacter { c, index }
        }
        hex::FromHexError::OddLength => EncodingError::OddLength(s.len()),
        _ => EncodingError::InvalidLength {
            expected: s.len() / 2,
            got: s.len() / 2,
        },
    })
}

/// Decode a hex string that must hold exactly `N` bytes.
pub fn from_hex_array<const N: usize>(s: &str) -> Result<[u8; N], EncodingError> {
    let bytes = from_hex(s)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| EncodingError::InvalidLength { expected: N, got })
}

/// Serde adapter that writes byte fields as hex strings.
///
/// Use with `#[serde(with = "keygen_core::encoding::serde_hex")]` on any
/// field whose type is `Vec<u8>` or `[u8; N]`.
pub mod serde_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serializer.serialize_str(&super::to_hex(bytes))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<Vec<u8>>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = super::from_hex(&s).map_err(serde::de::Error::custom)?;
        let got = bytes.len();
        T::try_from(bytes).map_err(|_| {
            serde::de::Error::custom(format!("unexpected byte length {got}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lower_case_zero_padded() {
        assert_eq!(to_hex([0x00, 0x0a, 0xff]), "000aff");
    }

    #[test]
    fn decodes_either_case() {
        assert_eq!(from_hex("ABcd").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn empty_roundtrip() {
        assert_eq!(to_hex([0u8; 0]), "");
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn odd_length_rejected() {
        assert_eq!(from_hex("abc").unwrap_err(), EncodingError::OddLength(3));
    }

    #[test]
    fn invalid_character_rejected() {
        let err = from_hex("0g").unwrap_err();
        assert_eq!(err, EncodingError::InvalidCharacter { c: 'g', index: 1 });
    }

    #[test]
    fn fixed_width_decode() {
        let arr: [u8; 2] = from_hex_array("beef").unwrap();
        assert_eq!(arr, [0xbe, 0xef]);
    }

    #[test]
    fn fixed_width_wrong_length() {
        let err = from_hex_array::<4>("beef").unwrap_err();
        assert_eq!(err, EncodingError::InvalidLength { expected: 4, got: 2 });
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(with = "serde_hex")]
        fixed: [u8; 3],
        #[serde(with = "serde_hex")]
        var: Vec<u8>,
    }

    #[test]
    fn serde_adapter_uses_hex_strings() {
        let h = Holder { fixed: [1, 2, 3], var: vec![0xde, 0xad] };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({ "fixed": "010203", "var": "dead" }));
        let back: Holder = serde_json::from_value(json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn serde_adapter_rejects_wrong_width() {
        let json = serde_json::json!({ "fixed": "0102", "var": "" });
        assert!(serde_json::from_value::<Holder>(json).is_err());
    }
}
