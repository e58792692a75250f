//! Recorded reference values and the tolerance they are checked with

use std::fmt;

use thiserror::Error;

/// How close a result must be to its recorded value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// The difference rounds to zero at this many decimal places
    Places(u32),
    /// The difference is at most this large
    Absolute(f64),
    /// Bit-for-bit equal, for counts
    Exact,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Places(7)
    }
}

impl Tolerance {
    /// Whether `actual` is close enough to `expected`
    ///
    /// Equal values always pass, so equal infinities do too. NaN never
    /// passes.
    pub fn accepts(&self, expected: f64, actual: f64) -> bool {
        if actual == expected {
            return true;
        }
        let diff = (actual - expected).abs();
        match *self {
            // diff rounds to zero at n places; a diff of exactly half a unit passes
            Tolerance::Places(n) => diff * 10f64.powi(n as i32) <= 0.5,
            Tolerance::Absolute(eps) => diff <= eps,
            Tolerance::Exact => false,
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Places(n) => write!(f, "{n} places"),
            Tolerance::Absolute(eps) => write!(f, "+/- {eps:e}"),
            Tolerance::Exact => write!(f, "exact"),
        }
    }
}

/// A result that differs from its record
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{id}: expected {expected} ({tolerance}), got {actual}")]
pub struct Mismatch {
    pub id: &'static str,
    pub expected: f64,
    pub actual: f64,
    pub tolerance: Tolerance,
}

/// One recorded value of a demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedResult {
    /// Name of the value within its case
    pub id: &'static str,
    pub expected: f64,
    pub tolerance: Tolerance,
}

impl ExpectedResult {
    /// A record checked to 7 decimal places
    pub const fn new(id: &'static str, expected: f64) -> Self {
        Self {
            id,
            expected,
            tolerance: Tolerance::Places(7),
        }
    }

    pub const fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn check(&self, actual: f64) -> Result<(), Mismatch> {
        if self.tolerance.accepts(self.expected, actual) {
            Ok(())
        } else {
            Err(Mismatch {
                id: self.id,
                expected: self.expected,
                actual,
                tolerance: self.tolerance,
            })
        }
    }
}
