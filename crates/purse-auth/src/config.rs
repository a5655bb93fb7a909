//! Login service configuration, stored as plain JSON next to the server data.
//!
//! The group and digest allow-list are fixed when the service starts.

use std::fs;
use std::path::Path;
use std::time::Duration;

use purse_srp::SrpPolicy;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Configuration for [`AuthService`](crate::AuthService).
///
/// Persisted to `{data_dir}/auth.json`. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Group and digest policy.
    #[serde(default)]
    pub policy: SrpPolicy,

    /// Seconds a challenge stays answerable.
    #[serde(default = "default_handshake_ttl")]
    pub handshake_ttl_secs: u64,

    /// Upper bound on concurrently pending handshakes.
    #[serde(default = "default_max_pending")]
    pub max_pending: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            policy: SrpPolicy::default(),
            handshake_ttl_secs: default_handshake_ttl(),
            max_pending: default_max_pending(),
        }
    }
}

const fn default_handshake_ttl() -> u64 {
    120
}
const fn default_max_pending() -> usize {
    10_000
}

// ── File I/O ───────────────────────────────────────────────────────

const CONFIG_FILE: &str = "auth.json";

impl AuthConfig {
    /// Load from `{data_dir}/auth.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or
    /// contains invalid JSON.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);
        fs::read_to_string(&path).map_or_else(
            |_| Self::default(),
            |contents| {
                serde_json::from_str(&contents).unwrap_or_else(|e| {
                    tracing::warn!("ignoring unreadable {CONFIG_FILE}: {e}");
                    Self::default()
                })
            },
        )
    }

    /// Persist to `{data_dir}/auth.json` (write to `.tmp`, then rename).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Io` if the directory does not exist or the
    /// file system rejects the write/rename.
    pub fn save(&self, data_dir: &Path) -> Result<(), AuthError> {
        let path = data_dir.join(CONFIG_FILE);
        let tmp = data_dir.join(".auth.json.tmp");

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(&tmp, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;

        Ok(())
    }

    /// Reject configurations the service cannot run with.
    ///
    /// # Errors
    ///
    /// `AuthError::Srp` for an inconsistent policy, `AuthError::Config`
    /// for a zero TTL or a zero pending limit.
    pub fn validate(&self) -> Result<(), AuthError> {
        self.policy.validate()?;
        if self.handshake_ttl_secs == 0 {
            return Err(AuthError::Config("handshakeTtlSecs must be positive".into()));
        }
        if self.max_pending == 0 {
            return Err(AuthError::Config("maxPending must be positive".into()));
        }
        Ok(())
    }

    /// Handshake time-to-live as a [`Duration`].
    #[must_use]
    pub const fn handshake_ttl(&self) -> Duration {
        Duration::from_secs(self.handshake_ttl_secs)
    }
}

// ── Tests ──────────────────────────────────────────────────────────
