//! `purse-auth`: server-side SRP login orchestration for Purse.
//!
//! Wraps the pure handshake arithmetic of [`purse_srp`] with the state a
//! login server needs: a credential store, a table of pending handshakes
//! with expiry, and decoy challenges for unknown identities.
//!
//! ```text
//! register(enrollment)            -> store (s, v)
//! begin_login(identity)           -> Challenge { handshakeId, N, g, s, B, alg }
//! verify(handshake_id, A)         -> PremasterSecret
//! ```
//!
//! Key confirmation (the MAC exchange over `S`) belongs to the caller.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, Challenge, HandshakeId};
pub use store::{CredentialStore, MemoryCredentialStore};
