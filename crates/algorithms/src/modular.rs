//! Modular arithmetic over fixed-width integers
//!
//! Every function here returns values normalized into `[0, m)`; callers
//! never fix up signs themselves. Products go through `i128`, so any
//! modulus below 2⁶² is safe.

use crate::error::{validate, Error, Result};

/// Bézout coefficients produced by the extended Euclidean algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bezout {
    /// Greatest common divisor, always non-negative
    pub gcd: i64,
    /// Coefficient of the first argument
    pub s: i64,
    /// Coefficient of the second argument
    pub t: i64,
}

/// Iterative extended Euclidean algorithm.
///
/// Returns `(gcd, s, t)` with `gcd = r0*s + r1*t`. The loop runs until the
/// remainder reaches zero, whatever the signs of the inputs.
///
/// A gcd of 2⁶³ does not fit in `i64`, so the inputs must not both be
/// multiples of 2⁶³ (`i64::MIN` paired with `0` or itself); every other
/// pair yields a non-negative gcd.
pub fn extended_euclid(r0: i64, r1: i64) -> Bezout {
    let (mut r0, mut r1) = (r0 as i128, r1 as i128);
    let (mut s0, mut s1) = (1i128, 0i128);
    let (mut t0, mut t1) = (0i128, 1i128);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
        (t0, t1) = (t1, t0 - q * t1);
    }

    if r0 < 0 {
        (r0, s0, t0) = (-r0, -s0, -t0);
    }

    Bezout {
        gcd: r0 as i64,
        s: s0 as i64,
        t: t0 as i64,
    }
}

/// Greatest common divisor of `a` and `b`
pub fn gcd(a: i64, b: i64) -> i64 {
    extended_euclid(a, b).gcd
}

/// Reduce `a` into `[0, m)`
#[inline]
pub fn reduce(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

#[inline]
fn reduce_wide(a: i128, m: i64) -> i64 {
    a.rem_euclid(m as i128) as i64
}

/// `(a + b) mod m`
#[inline]
pub fn mod_add(a: i64, b: i64, m: i64) -> i64 {
    reduce_wide(a as i128 + b as i128, m)
}

/// `(a - b) mod m`
#[inline]
pub fn mod_sub(a: i64, b: i64, m: i64) -> i64 {
    reduce_wide(a as i128 - b as i128, m)
}

/// `(a * b) mod m`
#[inline]
pub fn mod_mul(a: i64, b: i64, m: i64) -> i64 {
    reduce_wide(a as i128 * b as i128, m)
}

/// `-a mod m`
#[inline]
pub fn mod_neg(a: i64, m: i64) -> i64 {
    reduce_wide(-(a as i128), m)
}

/// `base^exp mod m` by square-and-multiply.
///
/// Negative exponents are rejected; use [`mod_inverse`] first.
pub fn mod_pow(base: i64, exp: i64, m: i64) -> Result<i64> {
    validate::parameter(m >= 1, "modulus", "must be positive")?;
    validate::parameter(exp >= 0, "exponent", "must be non-negative")?;
    Ok(pow_unsigned(base, exp as u64, m))
}

/// Square-and-multiply core; `m >= 1` is the caller's responsibility.
pub(crate) fn pow_unsigned(base: i64, exp: u64, m: i64) -> i64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = reduce(base, m);
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }
        exp >>= 1;
        base = mod_mul(base, base, m);
    }

    result
}

/// Modular multiplicative inverse of `a` modulo `m`, in `[0, m)`.
///
/// Fails with `NoInverseExists` when `gcd(a, m) != 1`, which includes every
/// `a ≡ 0 (mod m)`.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    validate::parameter(m >= 2, "modulus", "must be at least 2")?;

    let a = reduce(a, m);
    let eea = extended_euclid(m, a);
    if eea.gcd != 1 {
        return Err(Error::NoInverseExists {
            context: "mod_inverse",
            value: a,
            modulus: m,
        });
    }

    Ok(reduce(eea.t, m))
}
