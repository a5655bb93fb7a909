//! Login orchestration: registration, challenge issue, verification.
//!
//! Each `begin_login` creates a [`ServerHandshake`] with a fresh `b` and
//! parks it in the pending table under a random [`HandshakeId`]. `verify`
//! removes the entry before doing any arithmetic, so every challenge can be
//! answered at most once. Expired entries are rejected on use and swept by
//! [`AuthService::purge_expired`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use data_encoding::HEXLOWER;
use num_bigint::BigUint;
use purse_srp::{
    Enrollment, FakeCredentialGenerator, PremasterSecret, ServerChallenge, ServerHandshake,
    ServerSecret, SrpError,
};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::store::CredentialStore;

const HANDSHAKE_ID_LEN: usize = 16;

/// Opaque reference to a pending handshake, sent to the client with the
/// challenge and echoed back with `A`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandshakeId(String);

impl HandshakeId {
    fn generate() -> Result<Self, AuthError> {
        let mut bytes = [0u8; HANDSHAKE_ID_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SrpError::Random(format!("handshake id: {e}")))?;
        Ok(Self(HEXLOWER.encode(&bytes)))
    }

    /// The id as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandshakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HandshakeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Response to a login request: `(handshakeId, N, g, s, B, alg)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Reference to quote in [`AuthService::verify`].
    pub handshake_id: HandshakeId,
    /// Group, salt, `B` and digest.
    #[serde(flatten)]
    pub server: ServerChallenge,
}

#[derive(Debug)]
struct Pending {
    handshake: ServerHandshake,
    created: Instant,
}

/// Server-side SRP login service.
pub struct AuthService<S> {
    config: AuthConfig,
    store: S,
    fake: FakeCredentialGenerator,
    pending: Mutex<HashMap<HandshakeId, Pending>>,
}

impl<S: CredentialStore> AuthService<S> {
    /// Build a service over `store`.
    ///
    /// `secret` keys the decoy credentials for unknown identities. It must
    /// be the same across restarts.
    ///
    /// # Errors
    ///
    /// Returns the error from [`AuthConfig::validate`].
    pub fn new(config: AuthConfig, store: S, secret: ServerSecret) -> Result<Self, AuthError> {
        config.validate()?;
        tracing::info!(
            group = %config.policy.group,
            default_algorithm = %config.policy.default_algorithm,
            ttl_secs = config.handshake_ttl_secs,
            "SRP login service configured"
        );
        Ok(Self {
            config,
            store,
            fake: FakeCredentialGenerator::new(secret),
            pending: Mutex::new(HashMap::new()),
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Backing credential store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Store a client-computed enrollment, replacing any previous one.
    ///
    /// # Errors
    ///
    /// - `AuthError::Srp(InsufficientSecurity)` if the group differs from policy
    /// - `AuthError::Srp(UnsupportedAlgorithm)` if the digest is not allowed
    /// - `AuthError::Config` for an empty identity or a verifier outside `(0, N)`
    pub fn register(&self, enrollment: Enrollment) -> Result<(), AuthError> {
        let policy = &self.config.policy;
        if enrollment.group != policy.group {
            return Err(SrpError::InsufficientSecurity(format!(
                "enrollment uses {}, policy requires {}",
                enrollment.group, policy.group
            ))
            .into());
        }
        if !policy.allows(enrollment.algorithm) {
            return Err(SrpError::UnsupportedAlgorithm(format!(
                "{} is not allowed",
                enrollment.algorithm
            ))
            .into());
        }
        if enrollment.identity.is_empty() {
            return Err(AuthError::Config("identity must not be empty".into()));
        }
        let v = &enrollment.credentials.verifier;
        if v.bits() == 0 || v >= enrollment.group.parameters().n() {
            return Err(AuthError::Config("verifier outside (0, N)".into()));
        }

        tracing::debug!(identity = %enrollment.identity, algorithm = %enrollment.algorithm, "enrollment stored");
        self.store.upsert(enrollment);
        Ok(())
    }

    /// Issue a challenge for `identity`.
    ///
    /// Unknown identities receive a decoy challenge of the same shape,
    /// built from credentials derived from the server secret. The digest is
    /// the enrollment's, or for decoys one drawn per identity from the
    /// allow-list. Enrollments whose group or digest the policy no longer
    /// accepts are answered with a decoy.
    ///
    /// # Errors
    ///
    /// `AuthError::TooManyPending` when the table is full after purging,
    /// `AuthError::Srp` if handshake setup fails.
    pub fn begin_login(&self, identity: &str) -> Result<Challenge, AuthError> {
        let policy = &self.config.policy;
        let group = policy.group;

        // Decoy credentials are derived on every call so known and unknown
        // identities cost the same.
        let decoy_algorithm = self.fake.algorithm(identity, &policy.allowed_algorithms)?;
        let decoy = self
            .fake
            .credentials(identity, group.parameters(), decoy_algorithm)?;
        let (algorithm, credentials) = match self.store.lookup(identity) {
            Some(enrollment)
                if enrollment.group == group && policy.allows(enrollment.algorithm) =>
            {
                (enrollment.algorithm, enrollment.credentials)
            }
            _ => (decoy_algorithm, decoy),
        };

        let handshake = ServerHandshake::start(&mut OsRng, group, algorithm, credentials)?;
        let server = handshake.challenge();
        let handshake_id = HandshakeId::generate()?;

        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            if pending.len() >= self.config.max_pending {
                self.sweep(&mut pending);
            }
            if pending.len() >= self.config.max_pending {
                tracing::warn!(limit = self.config.max_pending, "pending handshake table full");
                return Err(AuthError::TooManyPending {
                    limit: self.config.max_pending,
                });
            }
            pending.insert(
                handshake_id.clone(),
                Pending {
                    handshake,
                    created: Instant::now(),
                },
            );
        }

        tracing::debug!(%identity, %handshake_id, %algorithm, "challenge issued");
        Ok(Challenge {
            handshake_id,
            server,
        })
    }

    /// Complete a handshake with the client's `A`.
    ///
    /// The pending entry is consumed whether or not this succeeds.
    ///
    /// # Errors
    ///
    /// - `AuthError::UnknownHandshake` for an id never issued or already used
    /// - `AuthError::HandshakeExpired` past the configured TTL
    /// - `AuthError::Srp(IllegalParameter)` if `A ≡ 0 (mod N)` or `u ≡ 0`
    pub fn verify(
        &self,
        handshake_id: &HandshakeId,
        a_pub: &BigUint,
    ) -> Result<PremasterSecret, AuthError> {
        let entry = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(handshake_id);
        let Some(mut entry) = entry else {
            tracing::debug!(%handshake_id, "verify for unknown handshake");
            return Err(AuthError::UnknownHandshake);
        };
        if entry.created.elapsed() >= self.config.handshake_ttl() {
            tracing::debug!(%handshake_id, "verify for expired handshake");
            return Err(AuthError::HandshakeExpired);
        }

        match entry.handshake.compute_premaster(a_pub) {
            Ok(premaster) => {
                entry.handshake.finish()?;
                tracing::debug!(%handshake_id, "premaster secret computed");
                Ok(premaster)
            }
            Err(e) => {
                tracing::warn!(%handshake_id, alert = ?e.alert(), "handshake rejected: {e}");
                Err(e.into())
            }
        }
    }

    /// Drop every pending handshake past its TTL. Returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        self.sweep(&mut pending)
    }

    /// Number of handshakes awaiting `A`.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn sweep(&self, pending: &mut HashMap<HandshakeId, Pending>) -> usize {
        let ttl = self.config.handshake_ttl();
        let before = pending.len();
        pending.retain(|_, p| p.created.elapsed() < ttl);
        let purged = before.saturating_sub(pending.len());
        if purged > 0 {
            tracing::info!(purged, "expired handshakes purged");
        }
        purged
    }
}

impl<S> fmt::Debug for AuthService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
