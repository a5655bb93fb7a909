//! Trusted SRP group parameters.
//!
//! The table holds the RFC 5054 Appendix A groups. 1024, 1536 and 2048
//! bits use generator 2; 3072 and 4096 bits are the RFC 3526 MODP primes
//! with generator 5. Every modulus is a safe prime.
//!
//! Client and server must agree on the group by name. A client receiving
//! `(N, g)` from a server resolves it with [`NamedGroup::identify`] and
//! refuses anything outside the table.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::codec::{int_to_hex, pad};
use crate::digest::{hash, HashAlgorithm, HashInput};
use crate::error::SrpError;

/// An SRP group: safe prime modulus `n` and generator `g`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParameters {
    n: BigUint,
    g: BigUint,
}

impl GroupParameters {
    /// Build a group from raw parameters.
    ///
    /// Primality is not checked here. Only groups from [`NamedGroup`] are
    /// trusted by the handshake layer.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InvalidInput` if `n < 3` or `g` is not in `[2, n)`.
    pub fn new(n: BigUint, g: BigUint) -> Result<Self, SrpError> {
        if n < BigUint::from(3u8) {
            return Err(SrpError::InvalidInput("modulus must be at least 3".into()));
        }
        if g < BigUint::from(2u8) || g >= n {
            return Err(SrpError::InvalidInput(
                "generator must lie in [2, N)".into(),
            ));
        }
        Ok(Self { n, g })
    }

    /// The modulus `N`.
    #[must_use]
    pub const fn n(&self) -> &BigUint {
        &self.n
    }

    /// The generator `g`.
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length of `N`.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.n.bits()
    }

    /// Byte length of `N` (the width of every padded value).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.n.to_bytes_be().len()
    }

    /// SRP-6a multiplier `k = H(N ‖ PAD(g, N))`.
    ///
    /// # Errors
    ///
    /// Propagates digest input errors (never expected for valid groups).
    pub fn k(&self, algorithm: HashAlgorithm) -> Result<BigUint, SrpError> {
        let input = format!("{}{}", int_to_hex(&self.n), pad(&self.g, &self.n));
        hash(algorithm, HashInput::Hex(&input))
    }
}

/// Named entries of the trusted group table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedGroup {
    /// RFC 5054 1024-bit group (g = 2). Test vectors only.
    #[serde(rename = "RFC5054-1024")]
    Rfc5054_1024,
    /// RFC 5054 1536-bit group (g = 2).
    #[serde(rename = "RFC5054-1536")]
    Rfc5054_1536,
    /// RFC 5054 2048-bit group (g = 2).
    #[default]
    #[serde(rename = "RFC5054-2048")]
    Rfc5054_2048,
    /// RFC 5054 3072-bit group (g = 5).
    #[serde(rename = "RFC5054-3072")]
    Rfc5054_3072,
    /// RFC 5054 4096-bit group (g = 5).
    #[serde(rename = "RFC5054-4096")]
    Rfc5054_4096,
}

impl NamedGroup {
    /// Every group in the trusted table.
    pub const ALL: [Self; 5] = [
        Self::Rfc5054_1024,
        Self::Rfc5054_1536,
        Self::Rfc5054_2048,
        Self::Rfc5054_3072,
        Self::Rfc5054_4096,
    ];

    /// Canonical table name, e.g. `"RFC5054-2048"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rfc5054_1024 => "RFC5054-1024",
            Self::Rfc5054_1536 => "RFC5054-1536",
            Self::Rfc5054_2048 => "RFC5054-2048",
            Self::Rfc5054_3072 => "RFC5054-3072",
            Self::Rfc5054_4096 => "RFC5054-4096",
        }
    }

    /// The group's parameters, built once per process.
    #[must_use]
    pub fn parameters(self) -> &'static GroupParameters {
        static G1024: OnceLock<GroupParameters> = OnceLock::new();
        static G1536: OnceLock<GroupParameters> = OnceLock::new();
        static G2048: OnceLock<GroupParameters> = OnceLock::new();
        static G3072: OnceLock<GroupParameters> = OnceLock::new();
        static G4096: OnceLock<GroupParameters> = OnceLock::new();

        let (cell, n, g): (&OnceLock<GroupParameters>, &[u8], u8) = match self {
            Self::Rfc5054_1024 => (&G1024, &N_1024[..], 2),
            Self::Rfc5054_1536 => (&G1536, &N_1536[..], 2),
            Self::Rfc5054_2048 => (&G2048, &N_2048[..], 2),
            Self::Rfc5054_3072 => (&G3072, &N_3072[..], 5),
            Self::Rfc5054_4096 => (&G4096, &N_4096[..], 5),
        };
        cell.get_or_init(|| GroupParameters {
            n: BigUint::from_bytes_be(n),
            g: BigUint::from(g),
        })
    }

    /// Resolve received `(N, g)` against the trusted table.
    ///
    /// # Errors
    ///
    /// Returns `SrpError::InsufficientSecurity` if the pair is not a table entry.
    pub fn identify(n: &BigUint, g: &BigUint) -> Result<Self, SrpError> {
        Self::ALL
            .into_iter()
            .find(|group| {
                let params = group.parameters();
                params.n() == n && params.g() == g
            })
            .ok_or_else(|| {
                tracing::warn!(bits = n.bits(), "rejected untrusted SRP group");
                SrpError::InsufficientSecurity(format!(
                    "untrusted {}-bit group parameters",
                    n.bits()
                ))
            })
    }
}

impl fmt::Display for NamedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedGroup {
    type Err = SrpError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SrpError::InsufficientSecurity(format!("unknown group: {name}")))
    }
}

// ── Moduli (big-endian) ─────────────────────────────────────────────

static N_1024: [u8; 128] = [
    0xee, 0xaf, 0x0a, 0xb9, 0xad, 0xb3, 0x8d, 0xd6, 0x9c, 0x33, 0xf8, 0x0a,
    0xfa, 0x8f, 0xc5, 0xe8, 0x60, 0x72, 0x61, 0x87, 0x75, 0xff, 0x3c, 0x0b,
    0x9e, 0xa2, 0x31, 0x4c, 0x9c, 0x25, 0x65, 0x76, 0xd6, 0x74, 0xdf, 0x74,
    0x96, 0xea, 0x81, 0xd3, 0x38, 0x3b, 0x48, 0x13, 0xd6, 0x92, 0xc6, 0xe0,
    0xe0, 0xd5, 0xd8, 0xe2, 0x50, 0xb9, 0x8b, 0xe4, 0x8e, 0x49, 0x5c, 0x1d,
    0x60, 0x89, 0xda, 0xd1, 0x5d, 0xc7, 0xd7, 0xb4, 0x61, 0x54, 0xd6, 0xb6,
    0xce, 0x8e, 0xf4, 0xad, 0x69, 0xb1, 0x5d, 0x49, 0x82, 0x55, 0x9b, 0x29,
    0x7b, 0xcf, 0x18, 0x85, 0xc5, 0x29, 0xf5, 0x66, 0x66, 0x0e, 0x57, 0xec,
    0x68, 0xed, 0xbc, 0x3c, 0x05, 0x72, 0x6c, 0xc0, 0x2f, 0xd4, 0xcb, 0xf4,
    0x97, 0x6e, 0xaa, 0x9a, 0xfd, 0x51, 0x38, 0xfe, 0x83, 0x76, 0x43, 0x5b,
    0x9f, 0xc6, 0x1d, 0x2f, 0xc0, 0xeb, 0x06, 0xe3,
];

static N_1536: [u8; 192] = [
    0x9d, 0xef, 0x3c, 0xaf, 0xb9, 0x39, 0x27, 0x7a, 0xb1, 0xf1, 0x2a, 0x86,
    0x17, 0xa4, 0x7b, 0xbb, 0xdb, 0xa5, 0x1d, 0xf4, 0x99, 0xac, 0x4c, 0x80,
    0xbe, 0xee, 0xa9, 0x61, 0x4b, 0x19, 0xcc, 0x4d, 0x5f, 0x4f, 0x5f, 0x55,
    0x6e, 0x27, 0xcb, 0xde, 0x51, 0xc6, 0xa9, 0x4b, 0xe4, 0x60, 0x7a, 0x29,
    0x15, 0x58, 0x90, 0x3b, 0xa0, 0xd0, 0xf8, 0x43, 0x80, 0xb6, 0x55, 0xbb,
    0x9a, 0x22, 0xe8, 0xdc, 0xdf, 0x02, 0x8a, 0x7c, 0xec, 0x67, 0xf0, 0xd0,
    0x81, 0x34, 0xb1, 0xc8, 0xb9, 0x79, 0x89, 0x14, 0x9b, 0x60, 0x9e, 0x0b,
    0xe3, 0xba, 0xb6, 0x3d, 0x47, 0x54, 0x83, 0x81, 0xdb, 0xc5, 0xb1, 0xfc,
    0x76, 0x4e, 0x3f, 0x4b, 0x53, 0xdd, 0x9d, 0xa1, 0x15, 0x8b, 0xfd, 0x3e,
    0x2b, 0x9c, 0x8c, 0xf5, 0x6e, 0xdf, 0x01, 0x95, 0x39, 0x34, 0x96, 0x27,
    0xdb, 0x2f, 0xd5, 0x3d, 0x24, 0xb7, 0xc4, 0x86, 0x65, 0x77, 0x2e, 0x43,
    0x7d, 0x6c, 0x7f, 0x8c, 0xe4, 0x42, 0x73, 0x4a, 0xf7, 0xcc, 0xb7, 0xae,
    0x83, 0x7c, 0x26, 0x4a, 0xe3, 0xa9, 0xbe, 0xb8, 0x7f, 0x8a, 0x2f, 0xe9,
    0xb8, 0xb5, 0x29, 0x2e, 0x5a, 0x02, 0x1f, 0xff, 0x5e, 0x91, 0x47, 0x9e,
    0x8c, 0xe7, 0xa2, 0x8c, 0x24, 0x42, 0xc6, 0xf3, 0x15, 0x18, 0x0f, 0x93,
    0x49, 0x9a, 0x23, 0x4d, 0xcf, 0x76, 0xe3, 0xfe, 0xd1, 0x35, 0xf9, 0xbb,
];

static N_2048: [u8; 256] = [
    0xac, 0x6b, 0xdb, 0x41, 0x32, 0x4a, 0x9a, 0x9b, 0xf1, 0x66, 0xde, 0x5e,
    0x13, 0x89, 0x58, 0x2f, 0xaf, 0x72, 0xb6, 0x65, 0x19, 0x87, 0xee, 0x07,
    0xfc, 0x31, 0x92, 0x94, 0x3d, 0xb5, 0x60, 0x50, 0xa3, 0x73, 0x29, 0xcb,
    0xb4, 0xa0, 0x99, 0xed, 0x81, 0x93, 0xe0, 0x75, 0x77, 0x67, 0xa1, 0x3d,
    0xd5, 0x23, 0x12, 0xab, 0x4b, 0x03, 0x31, 0x0d, 0xcd, 0x7f, 0x48, 0xa9,
    0xda, 0x04, 0xfd, 0x50, 0xe8, 0x08, 0x39, 0x69, 0xed, 0xb7, 0x67, 0xb0,
    0xcf, 0x60, 0x95, 0x17, 0x9a, 0x16, 0x3a, 0xb3, 0x66, 0x1a, 0x05, 0xfb,
    0xd5, 0xfa, 0xaa, 0xe8, 0x29, 0x18, 0xa9, 0x96, 0x2f, 0x0b, 0x93, 0xb8,
    0x55, 0xf9, 0x79, 0x93, 0xec, 0x97, 0x5e, 0xea, 0xa8, 0x0d, 0x74, 0x0a,
    0xdb, 0xf4, 0xff, 0x74, 0x73, 0x59, 0xd0, 0x41, 0xd5, 0xc3, 0x3e, 0xa7,
    0x1d, 0x28, 0x1e, 0x44, 0x6b, 0x14, 0x77, 0x3b, 0xca, 0x97, 0xb4, 0x3a,
    0x23, 0xfb, 0x80, 0x16, 0x76, 0xbd, 0x20, 0x7a, 0x43, 0x6c, 0x64, 0x81,
    0xf1, 0xd2, 0xb9, 0x07, 0x87, 0x17, 0x46, 0x1a, 0x5b, 0x9d, 0x32, 0xe6,
    0x88, 0xf8, 0x77, 0x48, 0x54, 0x45, 0x23, 0xb5, 0x24, 0xb0, 0xd5, 0x7d,
    0x5e, 0xa7, 0x7a, 0x27, 0x75, 0xd2, 0xec, 0xfa, 0x03, 0x2c, 0xfb, 0xdb,
    0xf5, 0x2f, 0xb3, 0x78, 0x61, 0x60, 0x27, 0x90, 0x04, 0xe5, 0x7a, 0xe6,
    0xaf, 0x87, 0x4e, 0x73, 0x03, 0xce, 0x53, 0x29, 0x9c, 0xcc, 0x04, 0x1c,
    0x7b, 0xc3, 0x08, 0xd8, 0x2a, 0x56, 0x98, 0xf3, 0xa8, 0xd0, 0xc3, 0x82,
    0x71, 0xae, 0x35, 0xf8, 0xe9, 0xdb, 0xfb, 0xb6, 0x94, 0xb5, 0xc8, 0x03,
    0xd8, 0x9f, 0x7a, 0xe4, 0x35, 0xde, 0x23, 0x6d, 0x52, 0x5f, 0x54, 0x75,
    0x9b, 0x65, 0xe3, 0x72, 0xfc, 0xd6, 0x8e, 0xf2, 0x0f, 0xa7, 0x11, 0x1f,
    0x9e, 0x4a, 0xff, 0x73,
];

static N_3072: [u8; 384] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2,
    0x21, 0x68, 0xc2, 0x34, 0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1,
    0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74, 0x02, 0x0b, 0xbe, 0xa6,
    0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d,
    0xf2, 0x5f, 0x14, 0x37, 0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45,
    0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6, 0xf4, 0x4c, 0x42, 0xe9,
    0xa6, 0x37, 0xed, 0x6b, 0x0b, 0xff, 0x5c, 0xb6, 0xf4, 0x06, 0xb7, 0xed,
    0xee, 0x38, 0x6b, 0xfb, 0x5a, 0x89, 0x9f, 0xa5, 0xae, 0x9f, 0x24, 0x11,
    0x7c, 0x4b, 0x1f, 0xe6, 0x49, 0x28, 0x66, 0x51, 0xec, 0xe4, 0x5b, 0x3d,
    0xc2, 0x00, 0x7c, 0xb8, 0xa1, 0x63, 0xbf, 0x05, 0x98, 0xda, 0x48, 0x36,
    0x1c, 0x55, 0xd3, 0x9a, 0x69, 0x16, 0x3f, 0xa8, 0xfd, 0x24, 0xcf, 0x5f,
    0x83, 0x65, 0x5d, 0x23, 0xdc, 0xa3, 0xad, 0x96, 0x1c, 0x62, 0xf3, 0x56,
    0x20, 0x85, 0x52, 0xbb, 0x9e, 0xd5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6d,
    0x67, 0x0c, 0x35, 0x4e, 0x4a, 0xbc, 0x98, 0x04, 0xf1, 0x74, 0x6c, 0x08,
    0xca, 0x18, 0x21, 0x7c, 0x32, 0x90, 0x5e, 0x46, 0x2e, 0x36, 0xce, 0x3b,
    0xe3, 0x9e, 0x77, 0x2c, 0x18, 0x0e, 0x86, 0x03, 0x9b, 0x27, 0x83, 0xa2,
    0xec, 0x07, 0xa2, 0x8f, 0xb5, 0xc5, 0x5d, 0xf0, 0x6f, 0x4c, 0x52, 0xc9,
    0xde, 0x2b, 0xcb, 0xf6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7c,
    0xea, 0x95, 0x6a, 0xe5, 0x15, 0xd2, 0x26, 0x18, 0x98, 0xfa, 0x05, 0x10,
    0x15, 0x72, 0x8e, 0x5a, 0x8a, 0xaa, 0xc4, 0x2d, 0xad, 0x33, 0x17, 0x0d,
    0x04, 0x50, 0x7a, 0x33, 0xa8, 0x55, 0x21, 0xab, 0xdf, 0x1c, 0xba, 0x64,
    0xec, 0xfb, 0x85, 0x04, 0x58, 0xdb, 0xef, 0x0a, 0x8a, 0xea, 0x71, 0x57,
    0x5d, 0x06, 0x0c, 0x7d, 0xb3, 0x97, 0x0f, 0x85, 0xa6, 0xe1, 0xe4, 0xc7,
    0xab, 0xf5, 0xae, 0x8c, 0xdb, 0x09, 0x33, 0xd7, 0x1e, 0x8c, 0x94, 0xe0,
    0x4a, 0x25, 0x61, 0x9d, 0xce, 0xe3, 0xd2, 0x26, 0x1a, 0xd2, 0xee, 0x6b,
    0xf1, 0x2f, 0xfa, 0x06, 0xd9, 0x8a, 0x08, 0x64, 0xd8, 0x76, 0x02, 0x73,
    0x3e, 0xc8, 0x6a, 0x64, 0x52, 0x1f, 0x2b, 0x18, 0x17, 0x7b, 0x20, 0x0c,
    0xbb, 0xe1, 0x17, 0x57, 0x7a, 0x61, 0x5d, 0x6c, 0x77, 0x09, 0x88, 0xc0,
    0xba, 0xd9, 0x46, 0xe2, 0x08, 0xe2, 0x4f, 0xa0, 0x74, 0xe5, 0xab, 0x31,
    0x43, 0xdb, 0x5b, 0xfc, 0xe0, 0xfd, 0x10, 0x8e, 0x4b, 0x82, 0xd1, 0x20,
    0xa9, 0x3a, 0xd2, 0xca, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

static N_4096: [u8; 512] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2,
    0x21, 0x68, 0xc2, 0x34, 0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1,
    0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74, 0x02, 0x0b, 0xbe, 0xa6,
    0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d,
    0xf2, 0x5f, 0x14, 0x37, 0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45,
    0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6, 0xf4, 0x4c, 0x42, 0xe9,
    0xa6, 0x37, 0xed, 0x6b, 0x0b, 0xff, 0x5c, 0xb6, 0xf4, 0x06, 0xb7, 0xed,
    0xee, 0x38, 0x6b, 0xfb, 0x5a, 0x89, 0x9f, 0xa5, 0xae, 0x9f, 0x24, 0x11,
    0x7c, 0x4b, 0x1f, 0xe6, 0x49, 0x28, 0x66, 0x51, 0xec, 0xe4, 0x5b, 0x3d,
    0xc2, 0x00, 0x7c, 0xb8, 0xa1, 0x63, 0xbf, 0x05, 0x98, 0xda, 0x48, 0x36,
    0x1c, 0x55, 0xd3, 0x9a, 0x69, 0x16, 0x3f, 0xa8, 0xfd, 0x24, 0xcf, 0x5f,
    0x83, 0x65, 0x5d, 0x23, 0xdc, 0xa3, 0xad, 0x96, 0x1c, 0x62, 0xf3, 0x56,
    0x20, 0x85, 0x52, 0xbb, 0x9e, 0xd5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6d,
    0x67, 0x0c, 0x35, 0x4e, 0x4a, 0xbc, 0x98, 0x04, 0xf1, 0x74, 0x6c, 0x08,
    0xca, 0x18, 0x21, 0x7c, 0x32, 0x90, 0x5e, 0x46, 0x2e, 0x36, 0xce, 0x3b,
    0xe3, 0x9e, 0x77, 0x2c, 0x18, 0x0e, 0x86, 0x03, 0x9b, 0x27, 0x83, 0xa2,
    0xec, 0x07, 0xa2, 0x8f, 0xb5, 0xc5, 0x5d, 0xf0, 0x6f, 0x4c, 0x52, 0xc9,
    0xde, 0x2b, 0xcb, 0xf6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7c,
    0xea, 0x95, 0x6a, 0xe5, 0x15, 0xd2, 0x26, 0x18, 0x98, 0xfa, 0x05, 0x10,
    0x15, 0x72, 0x8e, 0x5a, 0x8a, 0xaa, 0xc4, 0x2d, 0xad, 0x33, 0x17, 0x0d,
    0x04, 0x50, 0x7a, 0x33, 0xa8, 0x55, 0x21, 0xab, 0xdf, 0x1c, 0xba, 0x64,
    0xec, 0xfb, 0x85, 0x04, 0x58, 0xdb, 0xef, 0x0a, 0x8a, 0xea, 0x71, 0x57,
    0x5d, 0x06, 0x0c, 0x7d, 0xb3, 0x97, 0x0f, 0x85, 0xa6, 0xe1, 0xe4, 0xc7,
    0xab, 0xf5, 0xae, 0x8c, 0xdb, 0x09, 0x33, 0xd7, 0x1e, 0x8c, 0x94, 0xe0,
    0x4a, 0x25, 0x61, 0x9d, 0xce, 0xe3, 0xd2, 0x26, 0x1a, 0xd2, 0xee, 0x6b,
    0xf1, 0x2f, 0xfa, 0x06, 0xd9, 0x8a, 0x08, 0x64, 0xd8, 0x76, 0x02, 0x73,
    0x3e, 0xc8, 0x6a, 0x64, 0x52, 0x1f, 0x2b, 0x18, 0x17, 0x7b, 0x20, 0x0c,
    0xbb, 0xe1, 0x17, 0x57, 0x7a, 0x61, 0x5d, 0x6c, 0x77, 0x09, 0x88, 0xc0,
    0xba, 0xd9, 0x46, 0xe2, 0x08, 0xe2, 0x4f, 0xa0, 0x74, 0xe5, 0xab, 0x31,
    0x43, 0xdb, 0x5b, 0xfc, 0xe0, 0xfd, 0x10, 0x8e, 0x4b, 0x82, 0xd1, 0x20,
    0xa9, 0x21, 0x08, 0x01, 0x1a, 0x72, 0x3c, 0x12, 0xa7, 0x87, 0xe6, 0xd7,
    0x88, 0x71, 0x9a, 0x10, 0xbd, 0xba, 0x5b, 0x26, 0x99, 0xc3, 0x27, 0x18,
    0x6a, 0xf4, 0xe2, 0x3c, 0x1a, 0x94, 0x68, 0x34, 0xb6, 0x15, 0x0b, 0xda,
    0x25, 0x83, 0xe9, 0xca, 0x2a, 0xd4, 0x4c, 0xe8, 0xdb, 0xbb, 0xc2, 0xdb,
    0x04, 0xde, 0x8e, 0xf9, 0x2e, 0x8e, 0xfc, 0x14, 0x1f, 0xbe, 0xca, 0xa6,
    0x28, 0x7c, 0x59, 0x47, 0x4e, 0x6b, 0xc0, 0x5d, 0x99, 0xb2, 0x96, 0x4f,
    0xa0, 0x90, 0xc3, 0xa2, 0x23, 0x3b, 0xa1, 0x86, 0x51, 0x5b, 0xe7, 0xed,
    0x1f, 0x61, 0x29, 0x70, 0xce, 0xe2, 0xd7, 0xaf, 0xb8, 0x1b, 0xdd, 0x76,
    0x21, 0x70, 0x48, 0x1c, 0xd0, 0x06, 0x91, 0x27, 0xd5, 0xb0, 0x5a, 0xa9,
    0x93, 0xb4, 0xea, 0x98, 0x8d, 0x8f, 0xdd, 0xc1, 0x86, 0xff, 0xb7, 0xdc,
    0x90, 0xa6, 0xc0, 0x8f, 0x4d, 0xf4, 0x35, 0xc9, 0x34, 0x06, 0x31, 0x99,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
// ── Tests ───────────────────────────────────────────────────────────
