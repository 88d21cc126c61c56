//! Curve parameters and the chord-tangent group law

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::modular::{mod_add, mod_inverse, mod_mul, mod_neg, mod_sub, reduce};
use crate::residue::{find_curve_point, sqrt_mod};
use smallecc_params::limits::{MAX_FIELD_PRIME, MAX_SAMPLING_ATTEMPTS};
use smallecc_api::error::ResultExt;
use smallecc_api::RandomSource;
use smallecc_params::CurveParams;

/// Short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ
///
/// Primality of `p` and non-singularity are the caller's responsibility;
/// [`Curve::is_singular`] is available for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurve"))]
pub struct Curve {
    a: i64,
    b: i64,
    p: i64,
}

/// Wire form of [`Curve`]; deserialization goes through [`Curve::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurve {
    a: i64,
    b: i64,
    p: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurve> for Curve {
    type Error = Error;

    fn try_from(raw: RawCurve) -> Result<Self> {
        Curve::new(raw.a, raw.b, raw.p)
    }
}

impl Curve {
    /// Create a curve, reducing `a` and `b` into `[0, p)`.
    ///
    /// `p` must be odd, greater than 3 and below 2⁶².
    pub fn new(a: i64, b: i64, p: i64) -> Result<Self> {
        validate::parameter(p > 3, "p", "field prime must be greater than 3")?;
        validate::parameter(p % 2 == 1, "p", "field prime must be odd")?;
        validate::parameter(p < MAX_FIELD_PRIME, "p", "field prime must be below 2^62")?;
        Ok(Self {
            a: reduce(a, p),
            b: reduce(b, p),
            p,
        })
    }

    /// Create a curve from a preset
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        Self::new(params.a, params.b, params.p)
    }

    /// The 'a' coefficient
    pub fn a(&self) -> i64 {
        self.a
    }

    /// The 'b' coefficient
    pub fn b(&self) -> i64 {
        self.b
    }

    /// The field prime
    pub fn p(&self) -> i64 {
        self.p
    }

    /// True when 4a³ + 27b² ≡ 0 (mod p)
    pub fn is_singular(&self) -> bool {
        let p = self.p;
        let a3 = mod_mul(mod_mul(self.a, self.a, p), self.a, p);
        let b2 = mod_mul(self.b, self.b, p);
        mod_add(mod_mul(4, a3, p), mod_mul(27, b2, p), p) == 0
    }

    /// Right-hand side x³ + ax + b (mod p)
    pub fn rhs(&self, x: i64) -> i64 {
        let p = self.p;
        let x = reduce(x, p);
        let x3 = mod_mul(mod_mul(x, x, p), x, p);
        mod_add(mod_add(x3, mod_mul(self.a, x, p), p), self.b, p)
    }

    /// Check that a point satisfies y² = x³ + ax + b. The identity is on
    /// every curve.
    pub fn contains(&self, point: &Point) -> bool {
        match self.normalize(point) {
            Point::Infinity => true,
            Point::Finite { x, y } => mod_mul(y, y, self.p) == self.rhs(x),
        }
    }

    /// Create a validated affine point, reducing both coordinates
    pub fn point(&self, x: i64, y: i64) -> Result<Point> {
        let point = self.normalize(&Point::finite(x, y));
        validate::on_curve("curve point", self, &point)?;
        Ok(point)
    }

    /// Reduce coordinates into `[0, p)`
    pub fn normalize(&self, point: &Point) -> Point {
        match *point {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::finite(reduce(x, self.p), reduce(y, self.p)),
        }
    }

    /// Add two points (group law)
    ///
    /// Distinct x-coordinates use the chord slope (y₂ − y₁)/(x₂ − x₁). Equal
    /// x-coordinates give the identity, except for two copies of the same
    /// point, which are doubled.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (x1, y1, x2, y2) = match (self.normalize(lhs), self.normalize(rhs)) {
            (Point::Infinity, q) => return Ok(q),
            (p, Point::Infinity) => return Ok(p),
            (Point::Finite { x: x1, y: y1 }, Point::Finite { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(&Point::finite(x1, y1));
            }
            return Ok(Point::Infinity);
        }

        let p = self.p;
        let den = mod_sub(x2, x1, p);
        let inv_den = mod_inverse(den, p).with_context("point addition")?;
        let slope = mod_mul(mod_sub(y2, y1, p), inv_den, p);

        Ok(self.third_point(slope, x1, y1, x2))
    }

    /// Double this point: 2P
    ///
    /// Points with 2y ≡ 0 (the 2-torsion points) double to the identity.
    pub fn double(&self, point: &Point) -> Result<Point> {
        let (x, y) = match self.normalize(point) {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Finite { x, y } => (x, y),
        };

        let p = self.p;
        let den = mod_add(y, y, p);
        if den == 0 {
            return Ok(Point::Infinity);
        }

        let inv_den = mod_inverse(den, p).with_context("point doubling")?;
        let num = mod_add(mod_mul(3, mod_mul(x, x, p), p), self.a, p);
        let slope = mod_mul(num, inv_den, p);

        Ok(self.third_point(slope, x, y, x))
    }

    /// x₃ = s² − x₁ − x₂, y₃ = s(x₁ − x₃) − y₁
    fn third_point(&self, slope: i64, x1: i64, y1: i64, x2: i64) -> Point {
        let p = self.p;
        let x3 = mod_sub(mod_sub(mod_mul(slope, slope, p), x1, p), x2, p);
        let y3 = mod_sub(mod_mul(slope, mod_sub(x1, x3, p), p), y1, p);
        Point::finite(x3, y3)
    }

    /// Inverse point: (x, −y). The identity negates to itself.
    pub fn negate(&self, point: &Point) -> Point {
        match self.normalize(point) {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::finite(x, mod_neg(y, self.p)),
        }
    }

    /// `lhs - rhs`
    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.add(lhs, &self.negate(rhs))
    }

    /// Scalar multiplication: k·P by double-and-add, most significant bit
    /// first.
    ///
    /// Defined for every `k`: 0 gives the identity and a negative `k`
    /// multiplies the negated point by |k|.
    pub fn scalar_mul(&self, point: &Point, k: i64) -> Result<Point> {
        let base = if k < 0 {
            self.negate(point)
        } else {
            self.normalize(point)
        };
        let n = k.unsigned_abs();

        let mut acc = Point::Infinity;
        for i in (0..u64::BITS - n.leading_zeros()).rev() {
            acc = self.double(&acc)?;
            if (n >> i) & 1 == 1 {
                acc = self.add(&acc, &base)?;
            }
        }
        Ok(acc)
    }

    /// Order of a point: the least n ≥ 1 with n·P = O.
    ///
    /// Runs in time linear in the order, so it is meant for small fields.
    /// Fails with `DegenerateCurve` past the Hasse bound p + 1 + 2√p, which
    /// only an off-curve point or a composite modulus can reach.
    pub fn order_of(&self, point: &Point) -> Result<u64> {
        let bound = self.hasse_bound();
        let start = self.normalize(point);

        let mut acc = start;
        let mut order = 1u64;
        while !acc.is_infinity() {
            if order >= bound {
                return Err(Error::DegenerateCurve {
                    context: "point order",
                    attempts: order as usize,
                });
            }
            acc = self.add(&acc, &start)?;
            order += 1;
        }
        Ok(order)
    }

    fn hasse_bound(&self) -> u64 {
        let p = self.p as u64;
        let mut root = (p as f64).sqrt() as u64;
        while root * root < p {
            root += 1;
        }
        p + 1 + 2 * root
    }

    /// Every affine point of the curve, ordered by x then y.
    ///
    /// The identity is not included. Linear in p.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.p).flat_map(move |x| {
            let roots = match sqrt_mod(self.rhs(x), self.p) {
                Some(0) => [Some(0), None],
                Some(y) => [Some(y), Some(self.p - y)],
                None => [None, None],
            };
            roots.into_iter().flatten().map(move |y| Point::finite(x, y))
        })
    }

    /// Random affine point, using the default sampling budget
    pub fn random_point<R: RandomSource>(&self, rng: &mut R) -> Result<Point> {
        find_curve_point(self, rng, MAX_SAMPLING_ATTEMPTS)
    }
}
