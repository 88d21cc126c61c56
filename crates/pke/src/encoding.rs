//! Koblitz embedding of integers as curve points
//!
//! A message m owns the x-candidates `m·κ, m·κ + 1, …, m·κ + κ − 1`. The
//! first candidate whose right-hand side is a square gives the point, and
//! `⌊x / κ⌋` recovers m.

use crate::error::Result;
use smallecc_algorithms::ec::{Curve, Point};
use smallecc_algorithms::error::{validate, Error as CoreError};
use smallecc_algorithms::sqrt_mod;

/// Embed `m` as a point of `curve` with expansion factor `kappa`.
///
/// Requires `m >= 0`, `kappa >= 1` and `(m + 1)·kappa <= p`, so the
/// candidate range stays inside the field and distinct messages never share
/// an x-coordinate. Fails with `DegenerateCurve` when none of the `kappa`
/// candidates lies on the curve.
pub fn embed_message(curve: &Curve, m: i64, kappa: i64) -> Result<Point> {
    validate::parameter(kappa >= 1, "kappa", "must be at least 1")?;
    validate::parameter(m >= 0, "m", "message must be non-negative")?;
    validate::parameter(
        (m as i128 + 1) * kappa as i128 <= curve.p() as i128,
        "m",
        "message too large for this field and kappa",
    )?;

    let p = curve.p();
    for j in 0..kappa {
        let x = m * kappa + j;
        match sqrt_mod(curve.rhs(x), p) {
            Some(y) => return Ok(Point::finite(x, y)),
            None => tracing::trace!(j, "embedding candidate is not on the curve, trying next offset"),
        }
    }

    tracing::debug!(kappa, "message embedding found no candidate on the curve");
    Err(CoreError::DegenerateCurve {
        context: "message embedding",
        attempts: kappa as usize,
    }
    .into())
}

/// Recover the integer embedded in `point`: `⌊x / kappa⌋`
pub fn extract_message(point: &Point, kappa: i64) -> Result<i64> {
    validate::parameter(kappa >= 1, "kappa", "must be at least 1")?;
    match point.x() {
        Some(x) if x >= 0 => Ok(x / kappa),
        _ => Err(CoreError::InvalidPoint {
            context: "message extraction",
        }
        .into()),
    }
}
