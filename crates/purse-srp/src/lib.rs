//! `purse-srp`: SRP-6a (RFC 5054) password-authenticated key exchange for Purse.
//!
//! This crate is the audit target: pure, synchronous integer arithmetic.
//! Zero network, zero async, zero shared mutable state. Randomness and the
//! fake-credential server secret are supplied by the caller.
//!
//! Leaf-first layout:
//! - [`codec`]: hex ⇄ integer, `PAD(x, N)`
//! - [`digest`]: [`HashAlgorithm`] dispatch
//! - [`arith`]: `mod_exp`, `mod_add`
//! - [`ct`]: constant-time comparisons
//! - [`groups`]: trusted RFC 5054 groups
//! - [`verifier`] / [`fake`]: enrollment values and decoys
//! - [`server`] / [`client`]: the two handshake halves

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod arith;
pub mod codec;
pub mod ct;
pub mod digest;

pub mod groups;
pub mod secret;

pub mod fake;
pub mod verifier;

pub mod client;
pub mod server;

pub mod config;

pub use arith::{mod_add, mod_exp};
pub use client::{
    client_premaster_secret, client_public_value, ClientHandshake, ClientResponse, ServerPublic,
};
pub use codec::{hex_to_int, int_to_hex, pad};
pub use config::SrpPolicy;
pub use ct::{is_zero_mod, safe_compare};
pub use digest::{hash, HashAlgorithm, HashInput};
pub use error::SrpError;
pub use fake::FakeCredentialGenerator;
pub use groups::{GroupParameters, NamedGroup};
pub use secret::{PremasterSecret, PrivateValue, ServerSecret};
pub use server::{
    compute_u, server_premaster_secret, server_public_value, ServerChallenge, ServerHandshake,
    ServerState,
};
pub use verifier::{compute_x, generate_salt, verifier, Credentials, Enrollment};
