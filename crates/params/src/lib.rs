//! Constant values for the smallecc library
//!
//! Named curve presets and the bounds applied to rejection sampling. The
//! presets are textbook-sized and offer no security; picking a curve of
//! adequate order is the caller's responsibility.

#![no_std]

pub mod curves;
pub mod limits;

pub use curves::CurveParams;
