//! Quadratic residues, modular square roots and curve point search
//!
//! All functions assume an odd prime modulus. A composite modulus does not
//! panic and any root returned still squares back to the input, but the
//! non-residue search scans `2..p` and is impractically slow for a large
//! composite.

use crate::ec::{Curve, Point};
use crate::error::{Error, Result};
use crate::modular::{mod_mul, pow_unsigned, reduce};
use smallecc_api::RandomSource;

/// Euler's criterion a^((p−1)/2) mod p: 1 for residues, p − 1 for
/// non-residues, 0 for a ≡ 0.
fn euler_criterion(a: i64, p: i64) -> i64 {
    pow_unsigned(a, ((p - 1) / 2) as u64, p)
}

/// Is `a` a square modulo `p`?
///
/// Zero counts as a residue (0 = 0²), so the answer agrees with an
/// exhaustive search for y with y² ≡ a over all of `[0, p)`.
pub fn is_quadratic_residue(a: i64, p: i64) -> bool {
    if p < 2 {
        return false;
    }
    let a = reduce(a, p);
    a == 0 || euler_criterion(a, p) == 1
}

/// Smallest z ≥ 2 that is not a square modulo `p`.
///
/// This is the auxiliary witness Tonelli–Shanks starts from; `None` only
/// for moduli that are not odd primes.
pub fn find_non_residue(p: i64) -> Option<i64> {
    if p < 3 {
        return None;
    }
    (2..p).find(|&z| euler_criterion(z, p) == p - 1)
}

/// Square root of `a` modulo an odd prime `p`.
///
/// Returns the smaller of the two roots r and p − r, or `None` when `a` is
/// not a residue.
pub fn sqrt_mod(a: i64, p: i64) -> Option<i64> {
    if p < 3 || p % 2 == 0 {
        return None;
    }
    let a = reduce(a, p);
    if a == 0 {
        return Some(0);
    }
    if euler_criterion(a, p) != 1 {
        return None;
    }

    let root = if p % 4 == 3 {
        pow_unsigned(a, ((p + 1) / 4) as u64, p)
    } else {
        tonelli_shanks(a, p)?
    };

    if mod_mul(root, root, p) != a {
        return None;
    }
    Some(root.min(p - root))
}

/// Tonelli–Shanks for a known residue `a`; p − 1 = q·2ˢ with q odd.
fn tonelli_shanks(a: i64, p: i64) -> Option<i64> {
    let mut q = p - 1;
    let mut s = 0u32;
    while q % 2 == 0 {
        q /= 2;
        s += 1;
    }

    let z = find_non_residue(p)?;
    let mut m = s;
    let mut c = pow_unsigned(z, q as u64, p);
    let mut t = pow_unsigned(a, q as u64, p);
    let mut r = pow_unsigned(a, ((q + 1) / 2) as u64, p);

    while t != 1 {
        // least i in (0, m) with t^(2^i) = 1
        let mut i = 0;
        let mut t2i = t;
        while t2i != 1 {
            t2i = mod_mul(t2i, t2i, p);
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = pow_unsigned(c, 1u64 << (m - i - 1), p);
        m = i;
        c = mod_mul(b, b, p);
        t = mod_mul(t, c, p);
        r = mod_mul(r, b, p);
    }

    Some(r)
}

/// Sample a random affine point of `curve`.
///
/// Draws x uniformly from `[0, p − 1]` until x³ + ax + b is a residue and
/// returns (x, √(x³ + ax + b)) with the smaller root. Gives up with
/// `DegenerateCurve` after `max_attempts` draws.
pub fn find_curve_point<R: RandomSource>(
    curve: &Curve,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Point> {
    let p = curve.p();
    for attempt in 1..=max_attempts {
        let x = rng.sample_inclusive(0, p - 1);
        match sqrt_mod(curve.rhs(x), p) {
            Some(y) => return Ok(Point::finite(x, y)),
            None => tracing::trace!(attempt, x, "x^3 + ax + b is not a square, resampling"),
        }
    }

    tracing::debug!(max_attempts, "curve point search exhausted its budget");
    Err(Error::DegenerateCurve {
        context: "curve point search",
        attempts: max_attempts,
    })
}
