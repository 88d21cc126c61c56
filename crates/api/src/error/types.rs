//! Error type definitions for curve and scheme operations

use thiserror::Error as ThisError;

/// Primary error type for smallecc operations
///
/// The point at infinity is a valid algebraic result and is never reported
/// through this type.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required denominator is not invertible modulo the field prime
    #[error("{context}: no inverse exists for {value} modulo {modulus}")]
    NoInverseExists {
        context: &'static str,
        value: i64,
        modulus: i64,
    },

    /// Rejection sampling exhausted its attempt budget
    #[error("{context}: degenerate curve, no valid sample after {attempts} attempts")]
    DegenerateCurve {
        context: &'static str,
        attempts: usize,
    },

    /// A scalar is outside the range the operation requires
    #[error("{context}: invalid scalar {scalar}")]
    InvalidScalar {
        context: &'static str,
        scalar: i64,
    },

    /// A point is not a finite point on the curve
    #[error("{context}: point is not a valid curve point")]
    InvalidPoint {
        context: &'static str,
    },

    /// Invalid parameter error
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// Encryption produced an unusable intermediate
    #[error("{context}: encryption failed")]
    EncryptionFailed {
        context: &'static str,
    },

    /// Decryption error
    #[error("{context}: decryption failed")]
    DecryptionFailed {
        context: &'static str,
    },
}

/// Result type for smallecc operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::InvalidParameter { name, reason }
    }

    /// Replace the context of an existing error
    ///
    /// `InvalidParameter` keeps its name and reason, which already locate
    /// the failure.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::NoInverseExists { value, modulus, .. } => Self::NoInverseExists {
                context,
                value,
                modulus,
            },
            Self::DegenerateCurve { attempts, .. } => Self::DegenerateCurve { context, attempts },
            Self::InvalidScalar { scalar, .. } => Self::InvalidScalar { context, scalar },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidParameter { name, reason } => Self::InvalidParameter { name, reason },
            Self::EncryptionFailed { .. } => Self::EncryptionFailed { context },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed { context },
        }
    }

    /// True for the failure raised by a non-invertible denominator
    pub fn is_no_inverse(&self) -> bool {
        matches!(self, Self::NoInverseExists { .. })
    }
}
