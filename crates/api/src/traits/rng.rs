//! Randomness collaborator used by key generation and encryption

use rand::{Rng, RngCore};

/// Uniform integer sampling over a closed range.
///
/// This is the only randomness capability the library needs. Every
/// `rand::RngCore` provides it; tests can substitute [`ScriptedSource`].
pub trait RandomSource {
    /// Sample an integer uniformly in `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn sample_inclusive(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: RngCore> RandomSource for R {
    fn sample_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi)
    }
}

/// Deterministic source that plays back a fixed sequence.
///
/// Each value is reduced into the requested range, so a scripted value that
/// already lies inside `[lo, hi]` is returned unchanged. The sequence cycles
/// once exhausted; an empty script always yields `lo`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn sample_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        if self.values.is_empty() {
            return lo;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        let (lo, hi, raw) = (lo as i128, hi as i128, raw as i128);
        let span = hi - lo + 1;
        (lo + (raw - lo).rem_euclid(span)) as i64
    }
}
