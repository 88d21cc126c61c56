//! Trait definitions shared across smallecc crates

pub mod pke;
pub mod rng;

pub use pke::Pke;
pub use rng::{RandomSource, ScriptedSource};
