//! Public Key Encryption over small prime-field curves for the smallecc library.
//!
//! Keys are scalars and curve points, messages are curve points. Integers
//! are turned into message points through [`encoding`].

#![forbid(unsafe_code)]

pub mod elgamal;
pub mod encoding;
pub mod error;
pub mod keys;

// Re-export key items
pub use elgamal::{decrypt, encrypt, encrypt_with_ephemeral, encrypt_with_limit, CipherPoint, ElGamal};
pub use encoding::{embed_message, extract_message};
pub use error::{Error, Result};
pub use keys::{generate_keypair, generate_keypair_with_limit, KeyPair, PrivateKey, PublicKey};
