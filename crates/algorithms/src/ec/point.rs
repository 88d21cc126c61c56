//! Affine curve points with an explicit point at infinity

use core::fmt;

/// A point on a short Weierstrass curve
///
/// The identity is its own variant, so no coordinate pair is reserved for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The point at infinity (group identity)
    #[default]
    Infinity,
    /// Affine point (x, y), coordinates in `[0, p)` once normalized by a curve
    Finite {
        /// x-coordinate
        x: i64,
        /// y-coordinate
        y: i64,
    },
}

impl Point {
    /// Create an affine point without checking the curve equation
    pub const fn finite(x: i64, y: i64) -> Self {
        Point::Finite { x, y }
    }

    /// Is this the identity point?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(i64, i64)> {
        match *self {
            Point::Infinity => None,
            Point::Finite { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<i64> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<i64> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::finite(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O"),
            Point::Finite { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
