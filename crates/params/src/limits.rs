//! Bounds for the rejection-sampling loops

/// Upper bound on samples drawn by key generation, ephemeral scalar
/// selection and curve point search before `DegenerateCurve` is reported.
pub const MAX_SAMPLING_ATTEMPTS: usize = 1024;

/// Default Koblitz expansion factor for embedding integers as points.
///
/// Each message value owns `kappa` consecutive x-candidates; the chance that
/// none of them lies on the curve is about `2^-kappa`.
pub const DEFAULT_KOBLITZ_KAPPA: i64 = 20;

/// Largest field prime accepted, keeping every product inside `i128`.
pub const MAX_FIELD_PRIME: i64 = 1 << 62;
