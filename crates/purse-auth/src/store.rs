//! Lookup of enrolled credentials by identity.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use purse_srp::Enrollment;

/// Persistent home of `(identity, s, v, alg, group)` records.
///
/// Implementations must be safe to share across request threads.
pub trait CredentialStore: Send + Sync {
    /// The enrollment for `identity`, if any.
    fn lookup(&self, identity: &str) -> Option<Enrollment>;

    /// Insert or replace the enrollment for `enrollment.identity`.
    ///
    /// Replacing is how a password change takes effect.
    fn upsert(&self, enrollment: Enrollment);

    /// Drop the enrollment for `identity`. Returns whether one existed.
    fn remove(&self, identity: &str) -> bool;
}

/// In-memory [`CredentialStore`] keyed by identity.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, Enrollment>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enrolled identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no identity is enrolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup(&self, identity: &str) -> Option<Enrollment> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identity)
            .cloned()
    }

    fn upsert(&self, enrollment: Enrollment) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(enrollment.identity.clone(), enrollment);
    }

    fn remove(&self, identity: &str) -> bool {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(identity)
            .is_some()
    }
}
