//! Decoy credentials for identities with no enrollment.
//!
//! A login attempt for an unknown identity must look exactly like one for a
//! known identity with a wrong password. The generator derives a salt and
//! verifier from a keyed HMAC of the identity, so repeated probes (and
//! probes across restarts) see the same salt.
//!
//! - salt     = `HMAC-SHA256(secret, "salt" ‖ I)`
//! - password = hex(`HMAC-SHA256(secret, "password" ‖ I)`)
//! - verifier = `g^x mod N` with `x` from that salt and password
//! - digest   = `allowed[HMAC-SHA256(secret, "algorithm" ‖ I)[0] mod len]`
//!
//! The decoy password is unknowable without the server secret, so no
//! password a client submits can complete the later key confirmation.

use data_encoding::HEXLOWER;
use num_bigint::BigUint;
use ring::hmac;
use zeroize::Zeroizing;

use crate::digest::HashAlgorithm;
use crate::error::SrpError;
use crate::groups::GroupParameters;
use crate::secret::ServerSecret;
use crate::verifier::{verifier, Credentials};

const SALT_LABEL: &[u8] = b"salt";
const PASSWORD_LABEL: &[u8] = b"password";
const ALGORITHM_LABEL: &[u8] = b"algorithm";

/// Deterministic source of decoy salt/verifier pairs.
#[derive(Debug)]
pub struct FakeCredentialGenerator {
    secret: ServerSecret,
}

impl FakeCredentialGenerator {
    /// Create a generator keyed by the server-wide secret.
    #[must_use]
    pub const fn new(secret: ServerSecret) -> Self {
        Self { secret }
    }

    /// Decoy salt for `identity`.
    #[must_use]
    pub fn salt(&self, identity: &str) -> BigUint {
        BigUint::from_bytes_be(self.tag(SALT_LABEL, identity).as_ref())
    }

    /// Decoy digest for `identity`, drawn from `allowed`.
    ///
    /// Stable per identity, so a decoy reports the same digest on every
    /// probe just like a real enrollment does.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::UnsupportedAlgorithm` if `allowed` is empty.
    pub fn algorithm(
        &self,
        identity: &str,
        allowed: &[HashAlgorithm],
    ) -> Result<HashAlgorithm, SrpError> {
        let tag = self.tag(ALGORITHM_LABEL, identity);
        tag.as_ref()
            .first()
            .and_then(|&byte| usize::from(byte).checked_rem(allowed.len()))
            .and_then(|index| allowed.get(index))
            .copied()
            .ok_or_else(|| SrpError::UnsupportedAlgorithm("allow-list is empty".into()))
    }

    /// Decoy salt and verifier for `identity`.
    ///
    /// # Errors
    ///
    /// Propagates digest and arithmetic errors.
    pub fn credentials(
        &self,
        identity: &str,
        group: &GroupParameters,
        algorithm: HashAlgorithm,
    ) -> Result<Credentials, SrpError> {
        let salt = self.salt(identity);
        let password = Zeroizing::new(HEXLOWER.encode(self.tag(PASSWORD_LABEL, identity).as_ref()));
        let verifier = verifier(&salt, identity, &password, group, algorithm)?;
        Ok(Credentials { salt, verifier })
    }

    fn tag(&self, label: &[u8], identity: &str) -> hmac::Tag {
        let key = hmac::Key::new(hmac::HMAC_SHA256, self.secret.expose());
        let mut ctx = hmac::Context::with_key(&key);
        ctx.update(label);
        ctx.update(identity.as_bytes());
        ctx.sign()
    }
}
