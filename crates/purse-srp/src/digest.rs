//! Pluggable digest evaluation for SRP.
//!
//! [`HashAlgorithm`] is a closed enum: each variant dispatches to one
//! digest implementation. SHA-1 and SHA-2 come from `ring::digest`, BLAKE2
//! from the `blake2` crate and BLAKE3 from `blake3`.
//!
//! Which algorithms a deployment accepts is an allow-list decision made in
//! [`crate::config::SrpPolicy`], not here. SHA-1 exists for RFC 5054
//! interoperability and test vectors.

use std::fmt;
use std::str::FromStr;

use blake2::{Blake2b512, Blake2s256, Digest};
use data_encoding::HEXLOWER_PERMISSIVE;
use num_bigint::BigUint;
use ring::digest;
use serde::{Deserialize, Serialize};

use crate::error::SrpError;

/// Hash algorithm used for `k`, `u`, `x` and the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-1 (RFC 5054 test vectors, legacy clients).
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// BLAKE2b with a 512-bit output.
    Blake2b512,
    /// BLAKE2s with a 256-bit output.
    Blake2s256,
    /// BLAKE3 with its default 256-bit output.
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm this engine can evaluate.
    pub const ALL: [Self; 7] = [
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Blake2b512,
        Self::Blake2s256,
        Self::Blake3,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Blake2b512 => "blake2b512",
            Self::Blake2s256 => "blake2s256",
            Self::Blake3 => "blake3",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 | Self::Blake2s256 | Self::Blake3 => 32,
            Self::Sha384 => 48,
            Self::Sha512 | Self::Blake2b512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = SrpError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha384" | "sha-384" => Ok(Self::Sha384),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "blake2b512" => Ok(Self::Blake2b512),
            "blake2s256" => Ok(Self::Blake2s256),
            "blake3" => Ok(Self::Blake3),
            _ => Err(SrpError::UnsupportedAlgorithm(name.to_owned())),
        }
    }
}

/// Input to [`hash`]. The caller decides how the string is read.
#[derive(Clone, Copy, Debug)]
pub enum HashInput<'a> {
    /// Raw UTF-8 text, hashed as its bytes.
    Text(&'a str),
    /// Hex-encoded integer(s), hashed as the bytes the digits denote.
    /// An odd number of digits is read with an implicit leading `'0'`.
    Hex(&'a str),
}

/// Digest raw bytes with the given algorithm.
#[must_use]
pub fn digest_bytes(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    let ring_digest = |alg: &'static digest::Algorithm| digest::digest(alg, data).as_ref().to_vec();
    match algorithm {
        HashAlgorithm::Sha1 => ring_digest(&digest::SHA1_FOR_LEGACY_USE_ONLY),
        HashAlgorithm::Sha256 => ring_digest(&digest::SHA256),
        HashAlgorithm::Sha384 => ring_digest(&digest::SHA384),
        HashAlgorithm::Sha512 => ring_digest(&digest::SHA512),
        HashAlgorithm::Blake2b512 => Blake2b512::digest(data).to_vec(),
        HashAlgorithm::Blake2s256 => Blake2s256::digest(data).to_vec(),
        HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
    }
}

/// `H(alg, input)` interpreted as a big-endian integer.
///
/// # Errors
///
/// Returns `SrpError::InvalidEncoding` if a [`HashInput::Hex`] input
/// contains non-hex characters.
pub fn hash(algorithm: HashAlgorithm, input: HashInput<'_>) -> Result<BigUint, SrpError> {
    let out = match input {
        HashInput::Text(text) => digest_bytes(algorithm, text.as_bytes()),
        HashInput::Hex(hex) => digest_bytes(algorithm, &decode_hex(hex)?),
    };
    Ok(BigUint::from_bytes_be(&out))
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, SrpError> {
    let decoded = if hex.len() % 2 == 1 {
        HEXLOWER_PERMISSIVE.decode(format!("0{hex}").as_bytes())
    } else {
        HEXLOWER_PERMISSIVE.decode(hex.as_bytes())
    };
    decoded.map_err(|e| SrpError::InvalidEncoding(format!("hash input: {e}")))
}
