//! Arithmetic primitives for elliptic curves over small prime fields
//!
//! This crate provides the building blocks every smallecc scheme is made of:
//!
//! - [`modular`]: extended Euclid, modular inverse and the central
//!   normalization into `[0, m)`
//! - [`residue`]: Euler's criterion, Tonelli–Shanks square roots and
//!   random curve point search
//! - [`ec`]: the short Weierstrass group law with an explicit point at
//!   infinity
//!
//! Integers are fixed-width `i64` values, with `i128` intermediates for
//! products. Nothing here is constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Modular arithmetic
pub mod modular;
pub use modular::{extended_euclid, mod_inverse, reduce, Bezout};

// Quadratic residues and point search
pub mod residue;
pub use residue::{find_curve_point, find_non_residue, is_quadratic_residue, sqrt_mod};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{Curve, Point};
