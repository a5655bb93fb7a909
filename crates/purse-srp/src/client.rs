//! Client side of the SRP-6a handshake.
//!
//! The client learns `(N, g, s, B, alg)` from the server, checks the group
//! against its policy, then sends `A` and keeps `S`.
//!
//! # Sign handling in `S`
//!
//! RFC 5054 defines `S = (B − k·g^x)^(a + u·x) mod N`. With unsigned
//! integers the base is computed as `(B + N·k − k·(g^x mod N)) mod N`.
//! Since `g^x mod N ≤ N − 1`, `k·(g^x mod N) ≤ k·N − k < B + N·k`, so the
//! subtraction never underflows. Adding `N·k ≡ 0 (mod N)` leaves the
//! residue unchanged, so the base equals `(B − k·g^x) mod N`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::arith::mod_exp;
use crate::config::SrpPolicy;
use crate::ct::is_zero_mod;
use crate::digest::HashAlgorithm;
use crate::error::SrpError;
use crate::groups::GroupParameters;
use crate::secret::{PremasterSecret, PrivateValue};
use crate::server::{compute_u, ServerChallenge};
use crate::verifier::compute_x;

/// What the client knows about the server after the challenge: `{N, g, s, B}`.
#[derive(Clone, Copy, Debug)]
pub struct ServerPublic<'a> {
    /// Agreed group.
    pub group: &'a GroupParameters,
    /// Salt `s`.
    pub salt: &'a BigUint,
    /// Server public value `B`.
    pub b_pub: &'a BigUint,
}

/// Client public value `A = g^a mod N`.
///
/// # Errors
///
/// Returns `SrpError::IllegalParameter` if `A ≡ 0 (mod N)`.
pub fn client_public_value(a: &PrivateValue, group: &GroupParameters) -> Result<BigUint, SrpError> {
    let n = group.n();
    let a_pub = mod_exp(group.g(), &a.to_biguint(), n)?;
    if is_zero_mod(&a_pub, n) {
        tracing::warn!("client public value A is zero mod N");
        return Err(SrpError::IllegalParameter(
            "client public value A ≡ 0 (mod N)".into(),
        ));
    }
    Ok(a_pub)
}

/// Client premaster secret `S = (B − k·g^x)^(a + u·x) mod N`.
///
/// # Errors
///
/// Returns `SrpError::IllegalParameter` if `B ≡ 0 (mod N)`, `A ≡ 0` or `u ≡ 0`.
pub fn client_premaster_secret(
    a: &PrivateValue,
    identity: &str,
    password: &str,
    server: &ServerPublic<'_>,
    algorithm: HashAlgorithm,
) -> Result<PremasterSecret, SrpError> {
    let group = server.group;
    let n = group.n();
    if is_zero_mod(server.b_pub, n) {
        tracing::warn!("server public value B is zero mod N");
        return Err(SrpError::IllegalParameter(
            "server public value B ≡ 0 (mod N)".into(),
        ));
    }

    let a_pub = client_public_value(a, group)?;
    let u = compute_u(&a_pub, server.b_pub, group, algorithm)?;
    if is_zero_mod(&u, n) {
        return Err(SrpError::IllegalParameter("scrambling parameter u is zero".into()));
    }
    let k = group.k(algorithm)?;
    let x = compute_x(server.salt, identity, password, algorithm)?;

    let gx = mod_exp(group.g(), &x, n)?;
    let base = (server.b_pub + n * &k - k * gx) % n;
    let exponent = a.to_biguint() + u * x;
    let s = mod_exp(&base, &exponent, n)?;
    Ok(PremasterSecret::new(&s, n))
}

/// Result of answering a challenge: `A` to send, `S` to keep.
#[derive(Debug)]
pub struct ClientResponse {
    /// Client public value `A`.
    pub a_pub: BigUint,
    /// Premaster secret `S`.
    pub premaster: PremasterSecret,
}

/// One client-side handshake attempt.
///
/// [`ClientHandshake::respond`] consumes the handshake, so `a` cannot be
/// reused for a second attempt.
#[derive(Debug)]
pub struct ClientHandshake {
    identity: String,
    a: PrivateValue,
}

impl ClientHandshake {
    /// Start an attempt for `identity` with a freshly drawn `a`.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::Random` if the generator fails.
    pub fn start<R: RngCore + CryptoRng>(rng: &mut R, identity: &str) -> Result<Self, SrpError> {
        Ok(Self::with_private_value(identity, PrivateValue::generate(rng)?))
    }

    /// Start an attempt with a caller-chosen `a` (test vectors).
    #[must_use]
    pub fn with_private_value(identity: &str, a: PrivateValue) -> Self {
        Self {
            identity: identity.to_owned(),
            a,
        }
    }

    /// The identity this attempt authenticates as.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Validate the server's challenge against `policy` and derive `A`, `S`.
    ///
    /// # Errors
    ///
    /// - `SrpError::InsufficientSecurity` if `(N, g)` is untrusted
    /// - `SrpError::UnsupportedAlgorithm` if the digest is not allowed
    /// - `SrpError::IllegalParameter` if `B ≡ 0 (mod N)`
    pub fn respond(
        self,
        password: &str,
        challenge: &ServerChallenge,
        policy: &SrpPolicy,
    ) -> Result<ClientResponse, SrpError> {
        let group = policy.accept_challenge(challenge)?.parameters();
        let a_pub = client_public_value(&self.a, group)?;
        let server = ServerPublic {
            group,
            salt: &challenge.salt,
            b_pub: &challenge.b_pub,
        };
        let premaster =
            client_premaster_secret(&self.a, &self.identity, password, &server, challenge.algorithm)?;
        Ok(ClientResponse { a_pub, premaster })
    }
}
