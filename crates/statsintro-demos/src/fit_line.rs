//! Least squares line fit with confidence intervals
//!
//! Demo data: fasting blood glucose against ventricular shortening
//! velocity, where one velocity is missing.

use statrs::distribution::{ContinuousCDF, StudentsT};
use statsintro_core::utils::{finite_pairs, mean};
use statsintro_core::{Error, Result};
use tracing::debug;

use crate::data::{GLUCOSE, SHORTENING_VELOCITY};
use crate::types::ConfidenceInterval;

/// Significance level of the demo fit
pub const DEMO_ALPHA: f64 = 0.01;

/// A fitted line `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub intercept: f64,
    pub slope: f64,
    pub ci_intercept: ConfidenceInterval,
    pub ci_slope: ConfidenceInterval,
    /// Standard deviation of the residuals (n - 2 degrees of freedom)
    pub residual_sd: f64,
    pub n: usize,
    mean_x: f64,
    sxx: f64,
    t_critical: f64,
}

impl LineFit {
    /// Value of the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Confidence interval of the mean response at `x`
    pub fn mean_response(&self, x: f64) -> ConfidenceInterval {
        let se = self.residual_sd * (1.0 / self.n as f64 + (x - self.mean_x).powi(2) / self.sxx).sqrt();
        ConfidenceInterval::symmetric(
            self.predict(x),
            self.t_critical * se,
            self.ci_slope.confidence_level,
        )
    }

    /// Residuals `y - predict(x)`
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter().zip(y).map(|(&xi, &yi)| yi - self.predict(xi)).collect()
    }
}

/// Fit a straight line by ordinary least squares
///
/// The intervals have confidence level `1 - alpha`. All values must be
/// finite; remove missing values first.
pub fn fit_line(x: &[f64], y: &[f64], alpha: f64) -> Result<LineFit> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "line fit"));
    }
    if x.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: x.len(),
        });
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(Error::non_finite("line fit data"));
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::invalid_probability("alpha", alpha));
    }

    let n = x.len();
    let mean_x = mean(x);
    let mean_y = mean(y);
    let sxx: f64 = x.iter().map(|&v| (v - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return Err(Error::Computation("all x values are equal".to_string()));
    }
    let sxy: f64 = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a - mean_x) * (b - mean_y))
        .sum();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let sse: f64 = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (b - intercept - slope * a).powi(2))
        .sum();
    let df = (n - 2) as f64;
    let residual_sd = (sse / df).sqrt();

    let t_critical = StudentsT::new(0.0, 1.0, df)?.inverse_cdf(1.0 - alpha / 2.0);
    let se_slope = residual_sd / sxx.sqrt();
    let se_intercept = residual_sd * (1.0 / n as f64 + mean_x * mean_x / sxx).sqrt();
    let level = 1.0 - alpha;

    Ok(LineFit {
        intercept,
        slope,
        ci_intercept: ConfidenceInterval::symmetric(intercept, t_critical * se_intercept, level),
        ci_slope: ConfidenceInterval::symmetric(slope, t_critical * se_slope, level),
        residual_sd,
        n,
        mean_x,
        sxx,
        t_critical,
    })
}

/// Fit the glucose data after dropping the incomplete row
pub fn demo() -> Result<LineFit> {
    let (x, y) = finite_pairs(&GLUCOSE, &SHORTENING_VELOCITY)?;
    debug!(
        kept = x.len(),
        dropped = GLUCOSE.len() - x.len(),
        "filtered missing values"
    );
    let fit = fit_line(&x, &y, DEMO_ALPHA)?;
    debug!(
        intercept = fit.intercept,
        slope = fit.slope,
        "glucose line fit"
    );
    Ok(fit)
}
