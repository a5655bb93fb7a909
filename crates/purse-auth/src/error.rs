//! Error types for `purse-auth`.

use purse_srp::SrpError;
use thiserror::Error;

/// Errors produced by the login service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Handshake arithmetic or parameter validation failed.
    #[error(transparent)]
    Srp(#[from] SrpError),

    /// No pending handshake with this id (never issued, already used, or purged).
    #[error("unknown handshake")]
    UnknownHandshake,

    /// The pending handshake outlived its time-to-live.
    #[error("handshake expired")]
    HandshakeExpired,

    /// The pending-handshake table is full.
    #[error("too many pending handshakes (limit {limit})")]
    TooManyPending {
        /// Configured maximum.
        limit: usize,
    },

    /// Invalid service configuration or registration data.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuthError {
    /// TLS-SRP alert code for errors that carry one.
    #[must_use]
    pub const fn alert(&self) -> Option<u8> {
        match self {
            Self::Srp(e) => e.alert(),
            _ => None,
        }
    }
}
