//! Server side of the SRP-6a handshake.
//!
//! # Flow
//!
//! 1. Look up `(s, v)` for the identity, or take decoy credentials from
//!    [`crate::fake::FakeCredentialGenerator`].
//! 2. [`ServerHandshake::start`] draws a fresh `b` and computes
//!    `B = (k·v + g^b) mod N`; [`ServerHandshake::challenge`] is sent to
//!    the client.
//! 3. On receipt of `A`, [`ServerHandshake::compute_premaster`] returns `S`.
//!
//! A handshake computes `S` at most once. Any validation failure moves it
//! to [`ServerState::Failed`]; a new attempt needs a new handshake (and so
//! a new `b`).

use num_bigint::{BigInt, BigUint};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::arith::{mod_add, mod_exp};
use crate::codec::{hex_int, pad};
use crate::ct::is_zero_mod;
use crate::digest::{hash, HashAlgorithm, HashInput};
use crate::error::SrpError;
use crate::groups::{GroupParameters, NamedGroup};
use crate::secret::{PremasterSecret, PrivateValue};
use crate::verifier::Credentials;

/// Scrambling parameter `u = H(PAD(A, N) ‖ PAD(B, N))`.
///
/// # Errors
///
/// Propagates digest input errors.
pub fn compute_u(
    a_pub: &BigUint,
    b_pub: &BigUint,
    group: &GroupParameters,
    algorithm: HashAlgorithm,
) -> Result<BigUint, SrpError> {
    let input = format!("{}{}", pad(a_pub, group.n()), pad(b_pub, group.n()));
    hash(algorithm, HashInput::Hex(&input))
}

/// Server public value `B = (k·v + g^b) mod N`.
///
/// # Errors
///
/// Returns `SrpError::IllegalParameter` if `B ≡ 0 (mod N)`.
pub fn server_public_value(
    b: &PrivateValue,
    verifier: &BigUint,
    group: &GroupParameters,
    algorithm: HashAlgorithm,
) -> Result<BigUint, SrpError> {
    let n = group.n();
    let k = group.k(algorithm)?;
    let kv = BigInt::from(k * verifier);
    let gb = BigInt::from(mod_exp(group.g(), &b.to_biguint(), n)?);
    let b_pub = mod_add(&kv, &gb, n)?;

    if is_zero_mod(&b_pub, n) {
        tracing::warn!("server public value B is zero mod N");
        return Err(SrpError::IllegalParameter(
            "server public value B ≡ 0 (mod N)".into(),
        ));
    }
    Ok(b_pub)
}

/// Server premaster secret `S = (A · v^u mod N)^b mod N`.
///
/// `B` is recomputed from `b` and `v`.
///
/// # Errors
///
/// Returns `SrpError::IllegalParameter` if `A ≡ 0 (mod N)` or `u ≡ 0`.
pub fn server_premaster_secret(
    b: &PrivateValue,
    group: &GroupParameters,
    verifier: &BigUint,
    a_pub: &BigUint,
    algorithm: HashAlgorithm,
) -> Result<PremasterSecret, SrpError> {
    let n = group.n();
    if is_zero_mod(a_pub, n) {
        tracing::warn!("client public value A is zero mod N");
        return Err(SrpError::IllegalParameter(
            "client public value A ≡ 0 (mod N)".into(),
        ));
    }

    let b_pub = server_public_value(b, verifier, group, algorithm)?;
    let u = compute_u(a_pub, &b_pub, group, algorithm)?;
    if is_zero_mod(&u, n) {
        return Err(SrpError::IllegalParameter("scrambling parameter u is zero".into()));
    }

    let base = (a_pub * mod_exp(verifier, &u, n)?) % n;
    let s = mod_exp(&base, &b.to_biguint(), n)?;
    Ok(PremasterSecret::new(&s, n))
}

/// What the server sends back when a login starts: `(N, g, s, B, alg)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerChallenge {
    /// Group modulus `N`.
    #[serde(with = "hex_int")]
    pub n: BigUint,
    /// Group generator `g`.
    #[serde(with = "hex_int")]
    pub g: BigUint,
    /// Salt `s` (real or decoy).
    #[serde(with = "hex_int")]
    pub salt: BigUint,
    /// Server public value `B`.
    #[serde(with = "hex_int")]
    pub b_pub: BigUint,
    /// Negotiated digest.
    pub algorithm: HashAlgorithm,
}

/// Progress of a [`ServerHandshake`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerState {
    /// `B` has been issued; waiting for `A`.
    AwaitingClientPublicValue,
    /// `S` has been handed to the caller.
    ComputedPremaster,
    /// The caller finished with the handshake.
    Done,
    /// A validation step failed. Terminal.
    Failed,
}

/// One server-side handshake attempt.
///
/// Holds `b` for the lifetime of the attempt; `b` is zeroized on drop.
#[derive(Debug)]
pub struct ServerHandshake {
    group: NamedGroup,
    algorithm: HashAlgorithm,
    credentials: Credentials,
    b: PrivateValue,
    b_pub: BigUint,
    state: ServerState,
}

impl ServerHandshake {
    /// Start a handshake with a freshly drawn `b`.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::Random` if the generator fails, or
    /// `SrpError::IllegalParameter` if `B ≡ 0 (mod N)`.
    pub fn start<R: RngCore + CryptoRng>(
        rng: &mut R,
        group: NamedGroup,
        algorithm: HashAlgorithm,
        credentials: Credentials,
    ) -> Result<Self, SrpError> {
        let b = PrivateValue::generate(rng)?;
        Self::with_private_value(group, algorithm, credentials, b)
    }

    /// Start a handshake with a caller-chosen `b` (test vectors).
    ///
    /// # Errors
    ///
    /// Returns `SrpError::IllegalParameter` if `B ≡ 0 (mod N)`.
    pub fn with_private_value(
        group: NamedGroup,
        algorithm: HashAlgorithm,
        credentials: Credentials,
        b: PrivateValue,
    ) -> Result<Self, SrpError> {
        let b_pub = server_public_value(&b, &credentials.verifier, group.parameters(), algorithm)?;
        Ok(Self {
            group,
            algorithm,
            credentials,
            b,
            b_pub,
            state: ServerState::AwaitingClientPublicValue,
        })
    }

    /// Server public value `B`.
    #[must_use]
    pub const fn public_value(&self) -> &BigUint {
        &self.b_pub
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Group this handshake runs in.
    #[must_use]
    pub const fn group(&self) -> NamedGroup {
        self.group
    }

    /// Digest this handshake uses.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The `(N, g, s, B, alg)` message for the client.
    #[must_use]
    pub fn challenge(&self) -> ServerChallenge {
        let params = self.group.parameters();
        ServerChallenge {
            n: params.n().clone(),
            g: params.g().clone(),
            salt: self.credentials.salt.clone(),
            b_pub: self.b_pub.clone(),
            algorithm: self.algorithm,
        }
    }

    /// Consume the client's `A` and compute `S`.
    ///
    /// # Errors
    ///
    /// - `SrpError::HandshakeState` if `S` was already computed or the
    ///   handshake failed earlier
    /// - `SrpError::IllegalParameter` if `A ≡ 0 (mod N)`; the handshake
    ///   becomes [`ServerState::Failed`]
    pub fn compute_premaster(&mut self, a_pub: &BigUint) -> Result<PremasterSecret, SrpError> {
        if self.state != ServerState::AwaitingClientPublicValue {
            return Err(SrpError::HandshakeState(format!(
                "cannot accept A in state {:?}",
                self.state
            )));
        }

        match server_premaster_secret(
            &self.b,
            self.group.parameters(),
            &self.credentials.verifier,
            a_pub,
            self.algorithm,
        ) {
            Ok(secret) => {
                self.state = ServerState::ComputedPremaster;
                Ok(secret)
            }
            Err(e) => {
                self.state = ServerState::Failed;
                Err(e)
            }
        }
    }

    /// Mark the handshake finished once the caller has used `S`.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::HandshakeState` unless `S` has been computed.
    pub fn finish(&mut self) -> Result<(), SrpError> {
        if self.state != ServerState::ComputedPremaster {
            return Err(SrpError::HandshakeState(format!(
                "cannot finish in state {:?}",
                self.state
            )));
        }
        self.state = ServerState::Done;
        Ok(())
    }
}
