//! Public API traits and types for the smallecc library
//!
//! This crate provides the public API surface shared by every smallecc
//! component: the error type, the randomness collaborator and the trait
//! implemented by point-based public-key encryption schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Pke, RandomSource, ScriptedSource};

// Re-export trait modules for direct access
pub use traits::{pke, rng};
