//! Modular arithmetic over arbitrary-precision integers.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::SrpError;

/// `base^exponent mod modulus` by left-to-right square-and-multiply.
///
/// Performs one squaring per exponent bit and one multiplication per set
/// bit. An exponent of zero yields `1` for every base and modulus.
///
/// # Errors
///
/// Returns `SrpError::Arithmetic` if `modulus` is zero and `exponent` is not.
pub fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint, SrpError> {
    if exponent.bits() == 0 {
        return Ok(BigUint::from(1u8));
    }
    if modulus.bits() == 0 {
        return Err(SrpError::Arithmetic("modulus must be non-zero".into()));
    }

    let base = base % modulus;
    let mut result = BigUint::from(1u8) % modulus;
    for i in (0..exponent.bits()).rev() {
        result = (&result * &result) % modulus;
        if exponent.bit(i) {
            result = (&result * &base) % modulus;
        }
    }
    Ok(result)
}

/// `(x mod n + y mod n) mod n`, with the result in `[0, n)`.
///
/// Operands may be negative or larger than `n`.
///
/// # Errors
///
/// Returns `SrpError::Arithmetic` if `n` is zero.
pub fn mod_add(x: &BigInt, y: &BigInt, n: &BigUint) -> Result<BigUint, SrpError> {
    if n.bits() == 0 {
        return Err(SrpError::Arithmetic("modulus must be non-zero".into()));
    }
    let n = BigInt::from(n.clone());
    let sum = reduce(x, &n) + reduce(y, &n);
    let (_, magnitude) = reduce(&sum, &n).into_parts();
    Ok(magnitude)
}

/// Least non-negative residue of `x` modulo a positive `n`.
fn reduce(x: &BigInt, n: &BigInt) -> BigInt {
    let r = x % n;
    if r.sign() == Sign::Minus {
        r + n
    } else {
        r
    }
}
