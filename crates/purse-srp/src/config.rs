//! Deployment policy: which group and which digests are acceptable.
//!
//! The allow-list is configuration, not protocol logic. Names are checked
//! once, when a handshake is negotiated; everything downstream works with
//! a typed [`HashAlgorithm`].

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::digest::HashAlgorithm;
use crate::error::SrpError;
use crate::groups::NamedGroup;
use crate::server::ServerChallenge;

/// Group and digest policy shared by client and server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrpPolicy {
    /// The one group this deployment runs in.
    #[serde(default)]
    pub group: NamedGroup,

    /// Digests a handshake may negotiate.
    #[serde(default = "default_allowed_algorithms")]
    pub allowed_algorithms: Vec<HashAlgorithm>,

    /// Digest used when the client expresses no preference.
    #[serde(default = "default_algorithm")]
    pub default_algorithm: HashAlgorithm,
}

impl Default for SrpPolicy {
    fn default() -> Self {
        Self {
            group: NamedGroup::default(),
            allowed_algorithms: default_allowed_algorithms(),
            default_algorithm: default_algorithm(),
        }
    }
}

fn default_allowed_algorithms() -> Vec<HashAlgorithm> {
    vec![
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Blake2b512,
        HashAlgorithm::Blake2s256,
    ]
}

const fn default_algorithm() -> HashAlgorithm {
    HashAlgorithm::Sha256
}

impl SrpPolicy {
    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::UnsupportedAlgorithm` if the allow-list is empty
    /// or does not contain the default algorithm.
    pub fn validate(&self) -> Result<(), SrpError> {
        if self.allowed_algorithms.is_empty() {
            return Err(SrpError::UnsupportedAlgorithm(
                "allow-list is empty".into(),
            ));
        }
        if !self.allows(self.default_algorithm) {
            return Err(SrpError::UnsupportedAlgorithm(format!(
                "default algorithm {} is not on the allow-list",
                self.default_algorithm
            )));
        }
        Ok(())
    }

    /// Whether `algorithm` is on the allow-list.
    #[must_use]
    pub fn allows(&self, algorithm: HashAlgorithm) -> bool {
        self.allowed_algorithms.contains(&algorithm)
    }

    /// Resolve a client-supplied algorithm name.
    ///
    /// `None` selects the default algorithm.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::UnsupportedAlgorithm` if the name is unknown or
    /// not allowed.
    pub fn negotiate(&self, name: Option<&str>) -> Result<HashAlgorithm, SrpError> {
        let Some(name) = name else {
            return Ok(self.default_algorithm);
        };
        let algorithm: HashAlgorithm = name.parse()?;
        if !self.allows(algorithm) {
            return Err(SrpError::UnsupportedAlgorithm(format!(
                "{algorithm} is not allowed"
            )));
        }
        Ok(algorithm)
    }

    /// Accept received `(N, g)` only if it is the configured group.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InsufficientSecurity` for untrusted parameters or
    /// a trusted group other than the configured one.
    pub fn accept_group(&self, n: &BigUint, g: &BigUint) -> Result<NamedGroup, SrpError> {
        let group = NamedGroup::identify(n, g)?;
        if group != self.group {
            return Err(SrpError::InsufficientSecurity(format!(
                "expected {}, server offered {group}",
                self.group
            )));
        }
        Ok(group)
    }

    /// Validate a whole server challenge (group and digest).
    ///
    /// # Errors
    ///
    /// `SrpError::InsufficientSecurity` for the group,
    /// `SrpError::UnsupportedAlgorithm` for the digest.
    pub fn accept_challenge(&self, challenge: &ServerChallenge) -> Result<NamedGroup, SrpError> {
        let group = self.accept_group(&challenge.n, &challenge.g)?;
        if !self.allows(challenge.algorithm) {
            return Err(SrpError::UnsupportedAlgorithm(format!(
                "{} is not allowed",
                challenge.algorithm
            )));
        }
        Ok(group)
    }
}
