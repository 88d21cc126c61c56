//! Error handling for arithmetic primitives
//!
//! The primitives share the API error type; this module adds the
//! validation helpers used at their entry points.

pub mod validate;

pub use smallecc_api::error::{Error, Result};
