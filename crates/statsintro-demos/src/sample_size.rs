//! Minimum sample sizes for detecting an effect
//!
//! Both formulas use the normal approximation for a two-sided test at
//! level `alpha` with the requested `power`.

use statrs::distribution::{ContinuousCDF, Normal};
use statsintro_core::{Error, Result};
use tracing::debug;

/// Significance level used when none is given
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Test power used when none is given
pub const DEFAULT_POWER: f64 = 0.8;

fn check_probability(name: &str, p: f64) -> Result<()> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_probability(name, p))
    }
}

fn check_effect(d: f64) -> Result<()> {
    if d.is_finite() && d != 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "effect size {d} must be finite and non-zero"
        )))
    }
}

/// `z(1 - alpha/2) + z(power)`
fn z_sum(alpha: f64, power: f64) -> Result<f64> {
    check_probability("alpha", alpha)?;
    check_probability("power", power)?;
    let normal = Normal::new(0.0, 1.0)?;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0) + normal.inverse_cdf(power))
}

fn to_count(n: f64) -> Result<u64> {
    if !n.is_finite() || n < 0.0 {
        return Err(Error::Computation(format!("sample size {n} is not a count")));
    }
    Ok(n.round() as u64)
}

/// Sample size to detect a shift of `d` standard deviations in one group
///
/// `round(((z(1 - alpha/2) + z(power)) / d)^2)`
pub fn one_group(d: f64, alpha: f64, power: f64) -> Result<u64> {
    check_effect(d)?;
    let z = z_sum(alpha, power)?;
    let n = to_count((z / d).powi(2))?;
    debug!(d, alpha, power, n, "one-group sample size");
    Ok(n)
}

/// Sample size per group to detect a difference `d` between two groups with
/// standard deviations `sigma1` and `sigma2`
///
/// `round((sigma1^2 + sigma2^2) * (z(1 - alpha/2) + z(power))^2 / d^2)`
pub fn two_groups(d: f64, sigma1: f64, sigma2: f64, alpha: f64, power: f64) -> Result<u64> {
    check_effect(d)?;
    if !(sigma1 > 0.0 && sigma2 > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "standard deviations ({sigma1}, {sigma2}) must be positive"
        )));
    }
    let z = z_sum(alpha, power)?;
    let n = to_count((sigma1.powi(2) + sigma2.powi(2)) * z.powi(2) / d.powi(2))?;
    debug!(d, sigma1, sigma2, alpha, power, n, "two-group sample size");
    Ok(n)
}

/// [`one_group`] at the default level and power
pub fn one_group_default(d: f64) -> Result<u64> {
    one_group(d, DEFAULT_ALPHA, DEFAULT_POWER)
}

/// [`two_groups`] at the default level and power
pub fn two_groups_default(d: f64, sigma1: f64, sigma2: f64) -> Result<u64> {
    two_groups(d, sigma1, sigma2, DEFAULT_ALPHA, DEFAULT_POWER)
}
