//! # smallecc
//!
//! Elliptic-curve arithmetic and EC-ElGamal over small prime fields.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! smallecc = "0.3"
//! ```
//!
//! ```
//! use smallecc::prelude::*;
//! use smallecc::params::curves::TOY_K7_P17;
//!
//! let (curve, g) = domain(&TOY_K7_P17)?;
//! let mut rng = ScriptedSource::new(vec![5, 2]);
//! let pair = generate_keypair(&curve, &g, &mut rng)?;
//! let message = curve.point(1, 12)?;
//! let cipher = encrypt(&curve, &g, &pair.public, &message, &mut rng)?;
//! assert_eq!(decrypt(&curve, &cipher, &pair.private)?, message);
//! # Ok::<(), smallecc::pke::Error>(())
//! ```
//!
//! ## Features
//!
//! - `pke` (default): key generation, EC-ElGamal and message embedding
//! - `serde`: `Serialize`/`Deserialize` for points, curves, public keys
//!   and ciphertexts
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`smallecc-api`]: error type, `Pke` trait, randomness collaborator
//! - [`smallecc-params`]: curve presets and sampling limits
//! - [`smallecc-algorithms`]: modular arithmetic, residues, group law
//! - [`smallecc-pke`]: keys, EC-ElGamal, Koblitz embedding

// Core re-exports (always available)
pub use smallecc_algorithms as algorithms;
pub use smallecc_api as api;
pub use smallecc_params as params;

// Feature-gated re-exports
#[cfg(feature = "pke")]
pub use smallecc_pke as pke;

/// Common imports for smallecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, RandomSource, ScriptedSource};

    // Re-export curve arithmetic
    pub use crate::algorithms::ec::{domain, Curve, Point};
    pub use crate::algorithms::{is_quadratic_residue, mod_inverse, sqrt_mod};

    // Re-export schemes
    #[cfg(feature = "pke")]
    pub use crate::pke::{
        decrypt, embed_message, encrypt, extract_message, generate_keypair, CipherPoint, ElGamal,
        KeyPair, PrivateKey, PublicKey,
    };
}
