//! Comparing one group with a fixed value
//!
//! The daily energy intake of 11 women is compared with the recommended
//! intake of 7725 kJ.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use statsintro_core::utils::{mean, std_dev};
use statsintro_core::{Error, Result};
use tracing::debug;

use crate::data::{ENERGY_INTAKE_PRE, RECOMMENDED_INTAKE};
use crate::types::TestResult;

/// Two-sided one-sample t-test of `data` against the mean `mu`
pub fn t_test_1samp(data: &[f64], mu: f64) -> Result<TestResult> {
    if data.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    let n = data.len() as f64;
    let se = std_dev(data) / n.sqrt();
    if se == 0.0 {
        return Err(Error::Computation("sample has zero variance".to_string()));
    }
    let t = (mean(data) - mu) / se;
    let dist = StudentsT::new(0.0, 1.0, n - 1.0)?;
    Ok(TestResult::new(t, 2.0 * dist.sf(t.abs())))
}

/// Result of testing a mean with the t distribution and with the normal
/// approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalComparison {
    pub t_test: TestResult,
    /// Two-sided p-value when the standard error is treated as exact
    pub normal_p: f64,
}

/// Test the mean of `data` against `check_value` twice: with the t
/// distribution and with a normal distribution of the same spread
///
/// For small samples the normal approximation gives smaller p-values.
pub fn compare_with_normal(data: &[f64], check_value: f64) -> Result<NormalComparison> {
    let t_test = t_test_1samp(data, check_value)?;
    let se = std_dev(data) / (data.len() as f64).sqrt();
    let normal = Normal::new(mean(data), se)?;
    let lower = normal.cdf(check_value);
    let normal_p = 2.0 * lower.min(1.0 - lower);
    Ok(NormalComparison { t_test, normal_p })
}

/// Is the mean energy intake different from the recommended intake?
pub fn check_mean() -> Result<TestResult> {
    let result = t_test_1samp(&ENERGY_INTAKE_PRE, RECOMMENDED_INTAKE)?;
    debug!(
        t = result.statistic,
        p = result.p_value,
        "energy intake against recommendation"
    );
    Ok(result)
}
