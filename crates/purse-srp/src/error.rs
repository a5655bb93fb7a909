//! Protocol error types for `purse-srp`.

use thiserror::Error;

/// TLS-SRP `illegal_parameter` alert (RFC 5054 §2.9).
pub const ALERT_ILLEGAL_PARAMETER: u8 = 47;

/// TLS-SRP `insufficient_security` alert (RFC 5054 §2.9).
pub const ALERT_INSUFFICIENT_SECURITY: u8 = 71;

/// Errors produced by SRP operations.
///
/// Every variant is terminal for the handshake attempt that raised it.
/// A new attempt needs fresh ephemeral values.
#[derive(Debug, Error)]
pub enum SrpError {
    /// A public value (or a value derived from one) is congruent to zero
    /// modulo N. Never corrected or retried.
    #[error("illegal parameter: {0}")]
    IllegalParameter(String),

    /// The peer offered group parameters that are not in the trusted table.
    #[error("insufficient security: {0}")]
    InsufficientSecurity(String),

    /// Hash algorithm name is unknown or not on the allow-list.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Malformed hex or integer encoding.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Caller-supplied material is unusable (too short, empty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Arithmetic on an invalid modulus.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// The CSPRNG failed to produce bytes.
    #[error("random source failure: {0}")]
    Random(String),

    /// A handshake was driven out of order or reused after finishing.
    #[error("handshake state error: {0}")]
    HandshakeState(String),
}

impl SrpError {
    /// TLS-SRP alert code corresponding to this error, if the RFC defines one.
    #[must_use]
    pub const fn alert(&self) -> Option<u8> {
        match self {
            Self::IllegalParameter(_) => Some(ALERT_ILLEGAL_PARAMETER),
            Self::InsufficientSecurity(_) => Some(ALERT_INSUFFICIENT_SECURITY),
            _ => None,
        }
    }
}
