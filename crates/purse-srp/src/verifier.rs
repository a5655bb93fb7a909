//! Password verifier derivation (enrollment side).
//!
//! `x = H(s ‖ H(I ":" P))` and `v = g^x mod N`, exactly as in RFC 5054
//! §2.4 / Appendix B. The salt is hashed as its natural big-endian bytes
//! and the inner digest at the algorithm's full output width; no
//! N-relative padding is applied to either.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::arith::mod_exp;
use crate::codec::{hex_int, int_to_hex};
use crate::digest::{hash, HashAlgorithm, HashInput};
use crate::error::SrpError;
use crate::groups::{GroupParameters, NamedGroup};

/// Salt length in bytes for new enrollments.
pub const SALT_LEN: usize = 32;

/// Stored half of an enrollment: salt and verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Salt `s`.
    #[serde(with = "hex_int")]
    pub salt: BigUint,
    /// Verifier `v = g^x mod N`.
    #[serde(with = "hex_int")]
    pub verifier: BigUint,
}

/// Everything the server persists for one identity.
///
/// Created once at registration and replaced wholesale on password change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Account identity `I`.
    pub identity: String,
    /// Group the verifier was computed in.
    pub group: NamedGroup,
    /// Digest used for `x`, `k` and `u`.
    pub algorithm: HashAlgorithm,
    /// Salt and verifier.
    #[serde(flatten)]
    pub credentials: Credentials,
}

impl Enrollment {
    /// Enroll `identity` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::Random` if the generator fails.
    pub fn create<R: RngCore + CryptoRng>(
        rng: &mut R,
        identity: &str,
        password: &str,
        group: NamedGroup,
        algorithm: HashAlgorithm,
    ) -> Result<Self, SrpError> {
        let salt = generate_salt(rng)?;
        let verifier = verifier(&salt, identity, password, group.parameters(), algorithm)?;
        Ok(Self {
            identity: identity.to_owned(),
            group,
            algorithm,
            credentials: Credentials { salt, verifier },
        })
    }
}

/// Draw a random [`SALT_LEN`]-byte salt.
///
/// # Errors
///
/// Returns `SrpError::Random` if the generator fails.
pub fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Result<BigUint, SrpError> {
    let mut bytes = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| SrpError::Random(format!("CSPRNG fill failed: {e}")))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Private key `x = H(s ‖ H(I ":" P))`.
///
/// # Errors
///
/// Propagates digest input errors.
pub fn compute_x(
    salt: &BigUint,
    identity: &str,
    password: &str,
    algorithm: HashAlgorithm,
) -> Result<BigUint, SrpError> {
    let credentials = Zeroizing::new(format!("{identity}:{password}"));
    let inner = hash(algorithm, HashInput::Text(&credentials))?;

    let width = algorithm.output_len().saturating_mul(2);
    let input = Zeroizing::new(format!(
        "{}{:0>width$}",
        int_to_hex(salt),
        int_to_hex(&inner)
    ));
    hash(algorithm, HashInput::Hex(&input))
}

/// Verifier `v = g^x mod N`.
///
/// # Errors
///
/// Propagates digest and arithmetic errors.
pub fn verifier(
    salt: &BigUint,
    identity: &str,
    password: &str,
    group: &GroupParameters,
    algorithm: HashAlgorithm,
) -> Result<BigUint, SrpError> {
    let x = compute_x(salt, identity, password, algorithm)?;
    mod_exp(group.g(), &x, group.n())
}
