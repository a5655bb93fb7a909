//! Timing-safe comparison of secret-derived integers.
//!
//! Comparisons run over fixed-width hex encodings with
//! [`subtle::ConstantTimeEq`], so the running time does not depend on the
//! position of the first differing digit. Relational operators on
//! `BigUint` short-circuit and must not be used on secret-derived values.

use num_bigint::BigUint;
use subtle::ConstantTimeEq;

use crate::codec::{int_to_hex, pad};

/// Constant-time equality of two integers.
///
/// Both sides are encoded at the width of the longer encoding. The width
/// reveals only magnitude, never the position of a mismatch.
#[must_use]
pub fn safe_compare(x: &BigUint, y: &BigUint) -> bool {
    let hx = int_to_hex(x);
    let hy = int_to_hex(y);
    let width = hx.len().max(hy.len());
    ct_eq_padded(&hx, &hy, width)
}

/// Constant-time equality of `PAD(x, n)` and `PAD(y, n)`.
#[must_use]
pub fn safe_compare_mod(x: &BigUint, y: &BigUint, n: &BigUint) -> bool {
    let px = pad(x, n);
    let py = pad(y, n);
    let width = px.len().max(py.len());
    ct_eq_padded(&px, &py, width)
}

/// `x ≡ 0 (mod n)`, decided in constant time over `n`-width encodings.
///
/// `n` must be non-zero; a zero modulus is treated as "everything is zero"
/// so a misconfigured group can never pass a zero-value check.
#[must_use]
pub fn is_zero_mod(x: &BigUint, n: &BigUint) -> bool {
    if n.bits() == 0 {
        return true;
    }
    let residue = x % n;
    safe_compare_mod(&residue, &BigUint::from(0u8), n)
}

fn ct_eq_padded(a: &str, b: &str, width: usize) -> bool {
    let a = format!("{a:0>width$}");
    let b = format!("{b:0>width$}");
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
