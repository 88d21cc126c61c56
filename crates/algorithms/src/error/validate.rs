//! Validation utilities for arithmetic primitives

use super::{Error, Result};
use crate::ec::{Curve, Point};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a scalar lies in `[lo, hi]`
#[inline(always)]
pub fn scalar_range(context: &'static str, scalar: i64, lo: i64, hi: i64) -> Result<()> {
    if scalar < lo || scalar > hi {
        return Err(Error::InvalidScalar { context, scalar });
    }
    Ok(())
}

/// Validate that a point is finite and satisfies the curve equation
#[inline(always)]
pub fn on_curve(context: &'static str, curve: &Curve, point: &Point) -> Result<()> {
    if point.is_infinity() || !curve.contains(point) {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
