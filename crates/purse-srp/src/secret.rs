//! Secret-bearing values of the handshake.
//!
//! - [`PrivateValue`]: ephemeral exponent `a` or `b`, one per handshake side
//! - [`ServerSecret`]: long-lived HMAC key behind fake credentials
//! - [`PremasterSecret`]: the shared `S`, handed to the caller once
//!
//! All three zeroize their bytes on drop and mask `Debug` output. None of
//! them implement `Serialize`.

use std::fmt;

use data_encoding::HEXLOWER_PERMISSIVE;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretSlice};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec::pad_bytes;
use crate::error::SrpError;

/// Minimum private exponent length in bytes (256 bits, RFC 5054 §2.5.4).
pub const MIN_PRIVATE_LEN: usize = 32;

/// Minimum server secret length in bytes.
pub const MIN_SERVER_SECRET_LEN: usize = 32;

fn fill_random<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<Vec<u8>, SrpError> {
    let mut bytes = vec![0u8; len];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| SrpError::Random(format!("CSPRNG fill failed: {e}")))?;
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// PrivateValue
// ---------------------------------------------------------------------------

/// Ephemeral private exponent (`a` on the client, `b` on the server).
///
/// Never persisted, never transmitted, never reused across attempts.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateValue {
    bytes: Vec<u8>,
}

impl PrivateValue {
    /// Draw a fresh 256-bit private value from a CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::Random` if the generator fails.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, SrpError> {
        Ok(Self {
            bytes: fill_random(rng, MIN_PRIVATE_LEN)?,
        })
    }

    /// Wrap caller-provided big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InvalidInput` for fewer than [`MIN_PRIVATE_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SrpError> {
        if bytes.len() < MIN_PRIVATE_LEN {
            return Err(SrpError::InvalidInput(format!(
                "private value too short: {} bytes (minimum {MIN_PRIVATE_LEN})",
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Parse a hex-encoded private value (test vectors, fixtures).
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InvalidEncoding` for bad hex, `SrpError::InvalidInput`
    /// if the decoded value is too short.
    pub fn from_hex(hex: &str) -> Result<Self, SrpError> {
        let mut bytes = HEXLOWER_PERMISSIVE
            .decode(hex.as_bytes())
            .map_err(|e| SrpError::InvalidEncoding(format!("private value: {e}")))?;
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// The exponent as an integer.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl fmt::Debug for PrivateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateValue(***)")
    }
}

// ---------------------------------------------------------------------------
// ServerSecret
// ---------------------------------------------------------------------------

/// Server-wide key for deriving fake credentials.
///
/// Must be stable across restarts so that decoy salts for unknown
/// identities do not change.
pub struct ServerSecret {
    inner: SecretSlice<u8>,
}

impl ServerSecret {
    /// Wrap existing key bytes.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InvalidInput` for fewer than
    /// [`MIN_SERVER_SECRET_LEN`] bytes.
    pub fn new(bytes: &[u8]) -> Result<Self, SrpError> {
        if bytes.len() < MIN_SERVER_SECRET_LEN {
            return Err(SrpError::InvalidInput(format!(
                "server secret too short: {} bytes (minimum {MIN_SERVER_SECRET_LEN})",
                bytes.len()
            )));
        }
        Ok(Self {
            inner: bytes.to_vec().into(),
        })
    }

    /// Generate a new random server secret.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::Random` if the generator fails.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, SrpError> {
        let mut bytes = fill_random(rng, MIN_SERVER_SECRET_LEN)?;
        let result = Self::new(&bytes);
        bytes.zeroize();
        result
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }
}

impl fmt::Debug for ServerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServerSecret(***)")
    }
}

// ---------------------------------------------------------------------------
// PremasterSecret
// ---------------------------------------------------------------------------

/// The shared premaster secret `S`, stored as `PAD(S, N)` bytes.
///
/// Equality is constant-time. The caller derives and confirms a session
/// key from it, then drops it.
pub struct PremasterSecret {
    inner: SecretSlice<u8>,
}

impl PremasterSecret {
    pub(crate) fn new(s: &BigUint, n: &BigUint) -> Self {
        Self {
            inner: pad_bytes(s, n).into(),
        }
    }

    /// Expose the fixed-width big-endian bytes of `S`.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// `S` as an integer.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(self.expose())
    }

    /// Length in bytes (the byte length of `N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Always `false` for a computed secret.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for PremasterSecret {
    fn eq(&self, other: &Self) -> bool {
        self.expose().ct_eq(other.expose()).into()
    }
}

impl Eq for PremasterSecret {}

impl fmt::Debug for PremasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PremasterSecret(***)")
    }
}
