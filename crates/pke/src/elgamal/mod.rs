//! EC-ElGamal encryption of curve points
//!
//! For a recipient key Q = d·G and a message point M, encryption picks an
//! ephemeral k and outputs (C1, C2) = (k·G, k·Q + M). Decryption recovers
//! M = C2 − d·C1. The scheme is unauthenticated and not constant time.

use crate::error::{Error as PkeError, Result};
use crate::keys::{generate_keypair_with_limit, KeyPair, PrivateKey, PublicKey};
use smallecc_algorithms::ec::{domain, Curve, Point};
use smallecc_algorithms::error::{validate, Error as CoreError};
use smallecc_api::error::Error as ApiError;
use smallecc_api::traits::Pke;
use smallecc_api::RandomSource;
use smallecc_params::limits::MAX_SAMPLING_ATTEMPTS;
use smallecc_params::CurveParams;

/// Ciphertext: the ephemeral point C1 and the masked message C2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherPoint {
    /// Ephemeral point k·G
    pub c1: Point,
    /// Masked message k·Q + M
    pub c2: Point,
}

/// (k·G, k·Q), or `None` when either is the point at infinity
fn ephemeral_points(curve: &Curve, base: &Point, q: &Point, k: i64) -> Result<Option<(Point, Point)>> {
    let c1 = curve.scalar_mul(base, k)?;
    if c1.is_infinity() {
        return Ok(None);
    }
    let shared = curve.scalar_mul(q, k)?;
    if shared.is_infinity() {
        return Ok(None);
    }
    Ok(Some((c1, shared)))
}

/// The message must be on the curve with coordinates already in `[0, p)`,
/// since decryption returns reduced coordinates.
fn check_inputs(curve: &Curve, base: &Point, recipient: &PublicKey, message: &Point) -> Result<()> {
    validate::on_curve("base point", curve, base)?;
    validate::on_curve("recipient public key", curve, recipient.point())?;
    validate::on_curve("message point", curve, message)?;
    if curve.normalize(message) != *message {
        return Err(CoreError::InvalidPoint {
            context: "message point",
        }
        .into());
    }
    Ok(())
}

/// Encrypt `message` to `recipient` with the default sampling budget.
///
/// Message coordinates outside `[0, p)` are rejected as `InvalidPoint`.
pub fn encrypt<R: RandomSource>(
    curve: &Curve,
    base: &Point,
    recipient: &PublicKey,
    message: &Point,
    rng: &mut R,
) -> Result<CipherPoint> {
    encrypt_with_limit(curve, base, recipient, message, rng, MAX_SAMPLING_ATTEMPTS)
}

/// Encrypt `message` to `recipient`, drawing at most `max_attempts`
/// ephemeral scalars.
///
/// k is drawn from `[2, p − 1]` and rejected while k·G or k·Q is the point
/// at infinity, so decryption never meets a degenerate shared point.
pub fn encrypt_with_limit<R: RandomSource>(
    curve: &Curve,
    base: &Point,
    recipient: &PublicKey,
    message: &Point,
    rng: &mut R,
    max_attempts: usize,
) -> Result<CipherPoint> {
    check_inputs(curve, base, recipient, message)?;
    validate::parameter(max_attempts > 0, "max_attempts", "must be at least 1")?;

    for attempt in 1..=max_attempts {
        let k = rng.sample_inclusive(2, curve.p() - 1);
        match ephemeral_points(curve, base, recipient.point(), k)? {
            Some((c1, shared)) => {
                let c2 = curve.add(&shared, message)?;
                return Ok(CipherPoint { c1, c2 });
            }
            None => tracing::trace!(attempt, "ephemeral scalar gives a point at infinity, resampling"),
        }
    }

    tracing::debug!(max_attempts, "ephemeral scalar selection exhausted its budget");
    Err(CoreError::DegenerateCurve {
        context: "ephemeral scalar selection",
        attempts: max_attempts,
    }
    .into())
}

/// Encrypt with a caller-chosen ephemeral scalar `k` in `[1, p − 1]`.
///
/// Fails with `EncryptionFailed` when k·G or k·Q is the point at infinity.
pub fn encrypt_with_ephemeral(
    curve: &Curve,
    base: &Point,
    recipient: &PublicKey,
    message: &Point,
    k: i64,
) -> Result<CipherPoint> {
    check_inputs(curve, base, recipient, message)?;
    validate::scalar_range("ephemeral scalar", k, 1, curve.p() - 1)?;

    let (c1, shared) = ephemeral_points(curve, base, recipient.point(), k)?
        .ok_or(PkeError::EncryptionFailed("ephemeral scalar gives a point at infinity"))?;
    let c2 = curve.add(&shared, message)?;
    Ok(CipherPoint { c1, c2 })
}

/// Decrypt a ciphertext: M = C2 − d·C1.
///
/// C1 at infinity, a shared point at infinity and a decoded identity are
/// reported as `DecryptionFailed`; components off the curve as
/// `InvalidCiphertext`.
pub fn decrypt(curve: &Curve, cipher: &CipherPoint, private: &PrivateKey) -> Result<Point> {
    if !curve.contains(&cipher.c1) {
        return Err(PkeError::InvalidCiphertext("C1 is not on the curve"));
    }
    if !curve.contains(&cipher.c2) {
        return Err(PkeError::InvalidCiphertext("C2 is not on the curve"));
    }
    if cipher.c1.is_infinity() {
        return Err(PkeError::DecryptionFailed("C1 is the point at infinity"));
    }

    let shared = curve.scalar_mul(&cipher.c1, private.scalar())?;
    if shared.is_infinity() {
        return Err(PkeError::DecryptionFailed("shared point is the point at infinity"));
    }

    let message = curve.sub(&cipher.c2, &shared)?;
    if message.is_infinity() {
        return Err(PkeError::DecryptionFailed("decoded message is the point at infinity"));
    }
    Ok(message)
}

/// EC-ElGamal over a fixed domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamal {
    curve: Curve,
    base: Point,
    max_attempts: usize,
}

impl ElGamal {
    /// Scheme over `curve` with base point `base`
    pub fn new(curve: Curve, base: Point) -> Result<Self> {
        let base = curve.normalize(&base);
        validate::on_curve("base point", &curve, &base)?;
        Ok(Self {
            curve,
            base,
            max_attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    /// Scheme over a preset domain
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        let (curve, base) = domain(params)?;
        Self::new(curve, base)
    }

    /// Replace the budget shared by key generation and ephemeral sampling
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The scheme's curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The scheme's base point
    pub fn base(&self) -> &Point {
        &self.base
    }

    /// The sampling budget
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Pke for ElGamal {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Plaintext = Point;
    type Ciphertext = CipherPoint;

    fn name(&self) -> &'static str {
        "EC-ElGamal"
    }

    fn keypair<R: RandomSource>(
        &self,
        rng: &mut R,
    ) -> smallecc_api::error::Result<(Self::PublicKey, Self::SecretKey)> {
        let KeyPair { public, private } =
            generate_keypair_with_limit(&self.curve, &self.base, rng, self.max_attempts)
                .map_err(ApiError::from)?;
        Ok((public, private))
    }

    fn encrypt<R: RandomSource>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> smallecc_api::error::Result<Self::Ciphertext> {
        encrypt_with_limit(&self.curve, &self.base, pk_recipient, plaintext, rng, self.max_attempts)
            .map_err(ApiError::from)
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> smallecc_api::error::Result<Self::Plaintext> {
        decrypt(&self.curve, ciphertext, sk_recipient).map_err(ApiError::from)
    }
}
