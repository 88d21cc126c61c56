//! Error handling for PKE operations.

use smallecc_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for PKE operations.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure raised by the arithmetic layer or by input validation
    #[error("PKE API error: {0}")]
    Api(#[from] CoreError),

    /// A ciphertext component is not a point of the scheme's curve
    #[error("invalid PKE ciphertext: {0}")]
    InvalidCiphertext(&'static str),

    /// An intermediate of encryption is the point at infinity
    #[error("PKE encryption failed: {0}")]
    EncryptionFailed(&'static str),

    /// An intermediate of decryption is the point at infinity
    #[error("PKE decryption failed: {0}")]
    DecryptionFailed(&'static str),
}

impl Error {
    /// The underlying API error, if this wraps one
    pub fn as_api(&self) -> Option<&CoreError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(e) => e,
            Error::InvalidCiphertext(reason) => CoreError::InvalidPoint { context: reason },
            Error::EncryptionFailed(reason) => CoreError::EncryptionFailed { context: reason },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed { context: reason },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
