//! Hex ⇄ integer conversion and fixed-width padding.
//!
//! Integers are encoded big-endian, lowercase, byte-aligned: every encoding
//! has an even number of digits so that concatenated encodings always
//! decode to the concatenation of the underlying byte strings.
//!
//! Any two integers concatenated for hashing must first go through [`pad`].
//! Unpadded concatenation is ambiguous (`0x01 ‖ 0x0203` vs `0x0102 ‖ 0x03`).

use data_encoding::HEXLOWER;
use num_bigint::BigUint;

use crate::error::SrpError;

/// Encode a non-negative integer as lowercase, byte-aligned hex.
///
/// Zero encodes as `"00"`.
#[must_use]
pub fn int_to_hex(x: &BigUint) -> String {
    HEXLOWER.encode(&x.to_bytes_be())
}

/// Decode a hex string (either case, any length) into an integer.
///
/// # Errors
///
/// Returns `SrpError::InvalidEncoding` if the string is empty or contains
/// a non-hex character.
pub fn hex_to_int(hex: &str) -> Result<BigUint, SrpError> {
    if hex.is_empty() {
        return Err(SrpError::InvalidEncoding("empty hex string".into()));
    }
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(SrpError::InvalidEncoding(format!(
            "non-hex character in {} digit string",
            hex.len()
        )));
    }
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| SrpError::InvalidEncoding("unparseable hex integer".into()))
}

/// `PAD(x, N)`: hex of `x` left-padded with `'0'` to the hex width of `n`.
///
/// Never truncates: if `x` already encodes to `n`'s width or wider, its
/// natural encoding is returned unchanged.
#[must_use]
pub fn pad(x: &BigUint, n: &BigUint) -> String {
    let width = int_to_hex(n).len();
    let hex = int_to_hex(x);
    format!("{hex:0>width$}")
}

/// Byte form of [`pad`]: big-endian bytes of `x`, left-padded with zero
/// bytes to the byte length of `n`.
#[must_use]
pub fn pad_bytes(x: &BigUint, n: &BigUint) -> Vec<u8> {
    let width = n.to_bytes_be().len();
    let bytes = x.to_bytes_be();
    let fill = width.saturating_sub(bytes.len());
    let mut out = vec![0u8; fill];
    out.extend_from_slice(&bytes);
    out
}

/// Serde adapter storing a `BigUint` as a hex string.
///
/// Use with `#[serde(with = "purse_srp::codec::hex_int")]`.
pub mod hex_int {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as lowercase byte-aligned hex.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::int_to_hex(value))
    }

    /// Deserialize from a hex string of either case.
    ///
    /// # Errors
    ///
    /// Fails on empty or non-hex strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let hex = String::deserialize(deserializer)?;
        super::hex_to_int(&hex).map_err(de::Error::custom)
    }
}
