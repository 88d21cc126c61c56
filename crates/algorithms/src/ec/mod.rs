//! Elliptic Curve Primitives
//!
//! Short Weierstrass curves y² = x³ + ax + b over a prime field 𝔽ₚ with p
//! below 2⁶². Points are affine with an explicit identity variant, and the
//! group law follows the chord-tangent construction:
//!
//! - distinct x-coordinates: slope (y₂ − y₁)/(x₂ − x₁)
//! - doubling: slope (3x² + a)/(2y), identity for 2-torsion points
//! - shared x-coordinate with different y: the identity
//!
//! Scalar multiplication is binary double-and-add. None of the operations
//! are constant time.

mod curve;
mod point;

pub use curve::Curve;
pub use point::Point;

use crate::error::{validate, Result};
use smallecc_params::CurveParams;

/// Curve and validated base point of a preset
pub fn domain(params: &CurveParams) -> Result<(Curve, Point)> {
    let curve = Curve::from_params(params)?;
    let g = base_point(&curve, params)?;
    Ok((curve, g))
}

/// The base point of a preset, checked against the curve equation
pub fn base_point(curve: &Curve, params: &CurveParams) -> Result<Point> {
    let g = curve.normalize(&Point::finite(params.g_x, params.g_y));
    validate::on_curve("base point", curve, &g)?;
    Ok(g)
}

/// General scalar multiplication: compute scalar * arbitrary point
pub fn scalar_mult(curve: &Curve, scalar: i64, point: &Point) -> Result<Point> {
    if point.is_infinity() {
        Ok(Point::Infinity)
    } else {
        curve.scalar_mul(point, scalar)
    }
}
