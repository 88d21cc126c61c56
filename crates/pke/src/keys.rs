//! Key material for point-based public-key schemes
//!
//! A private key is a scalar d with 1 < d < p, the matching public key is
//! Q = d·G for the domain base point G. Q is never the point at infinity.

use crate::error::Result;
use core::fmt;
use smallecc_algorithms::ec::{Curve, Point};
use smallecc_algorithms::error::{validate, Error as CoreError};
use smallecc_api::RandomSource;
use smallecc_params::limits::MAX_SAMPLING_ATTEMPTS;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key: the curve point Q = d·G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    q: Point,
}

impl PublicKey {
    /// Wrap a point received from elsewhere, checking it lies on `curve`
    pub fn new(curve: &Curve, q: Point) -> Result<Self> {
        let q = curve.normalize(&q);
        validate::on_curve("public key", curve, &q)?;
        Ok(Self { q })
    }

    /// The public point Q
    pub fn point(&self) -> &Point {
        &self.q
    }
}

/// Private key: the secret scalar d
///
/// The scalar is wiped when the key is dropped and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    d: i64,
}

impl PrivateKey {
    /// Create a private key, requiring 1 < d < p
    pub fn new(curve: &Curve, d: i64) -> Result<Self> {
        validate::scalar_range("private key", d, 2, curve.p() - 1)?;
        Ok(Self { d })
    }

    /// The secret scalar
    pub fn scalar(&self) -> i64 {
        self.d
    }

    /// Derive the public key d·G
    ///
    /// Fails with `InvalidPoint` when `base` is not a finite curve point and
    /// with `InvalidScalar` when d annihilates `base`.
    pub fn public_key(&self, curve: &Curve, base: &Point) -> Result<PublicKey> {
        validate::on_curve("base point", curve, base)?;
        let q = curve.scalar_mul(base, self.d)?;
        if q.is_infinity() {
            return Err(CoreError::InvalidScalar {
                context: "private key annihilates the base point",
                scalar: self.d,
            }
            .into());
        }
        Ok(PublicKey { q })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A freshly generated key pair
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// Published half
    pub public: PublicKey,
    /// Secret half
    pub private: PrivateKey,
}

/// Generate a key pair with the default sampling budget.
pub fn generate_keypair<R: RandomSource>(curve: &Curve, base: &Point, rng: &mut R) -> Result<KeyPair> {
    generate_keypair_with_limit(curve, base, rng, MAX_SAMPLING_ATTEMPTS)
}

/// Generate a key pair, drawing at most `max_attempts` candidate scalars.
///
/// d is drawn uniformly from `[2, p − 1]` and rejected while d·G is the
/// point at infinity. Running out of attempts fails with `DegenerateCurve`.
pub fn generate_keypair_with_limit<R: RandomSource>(
    curve: &Curve,
    base: &Point,
    rng: &mut R,
    max_attempts: usize,
) -> Result<KeyPair> {
    validate::on_curve("base point", curve, base)?;
    validate::parameter(max_attempts > 0, "max_attempts", "must be at least 1")?;

    for attempt in 1..=max_attempts {
        let d = rng.sample_inclusive(2, curve.p() - 1);
        let q = curve.scalar_mul(base, d)?;
        if q.is_infinity() {
            tracing::trace!(attempt, "candidate private scalar annihilates the base point, resampling");
            continue;
        }
        return Ok(KeyPair {
            public: PublicKey { q },
            private: PrivateKey { d },
        });
    }

    tracing::debug!(max_attempts, "key generation exhausted its budget");
    Err(CoreError::DegenerateCurve {
        context: "key generation",
        attempts: max_attempts,
    }
    .into())
}
