//! Result types shared by the demos

use std::fmt;

/// Outcome of a hypothesis test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Test statistic (F, t, z, U or T depending on the test)
    pub statistic: f64,
    pub p_value: f64,
}

impl TestResult {
    pub fn new(statistic: f64, p_value: f64) -> Self {
        Self { statistic, p_value }
    }

    /// Whether the null hypothesis is rejected at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statistic = {:.4}, p = {:.4}", self.statistic, self.p_value)
    }
}

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Symmetric interval `estimate ± margin`
    pub fn symmetric(estimate: f64, margin: f64, confidence_level: f64) -> Self {
        Self::new(estimate - margin, estimate + margin, estimate, confidence_level)
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significance() {
        let r = TestResult::new(3.7, 0.0436);
        assert!(r.is_significant(0.05));
        assert!(!r.is_significant(0.01));
        assert_eq!(r.to_string(), "statistic = 3.7000, p = 0.0436");
    }

    #[test]
    fn test_symmetric_interval() {
        let ci = ConfidenceInterval::symmetric(1.0, 0.25, 0.99);
        assert_eq!(ci.lower, 0.75);
        assert_eq!(ci.upper, 1.25);
        assert_eq!(ci.width(), 0.5);
        assert!(ci.contains(1.1));
        assert!(!ci.contains(1.3));
    }
}
