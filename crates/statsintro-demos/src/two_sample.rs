//! Comparing two groups
//!
//! Paired data: energy intake of the same women before and after
//! menstruation. Unpaired data: energy expenditure of lean and obese women.
//! Both are analysed with rank tests using the normal approximation.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use statsintro_core::utils::{mean, ranks_with_ties, sum_of_squares};
use statsintro_core::{Error, Result};
use tracing::debug;

use crate::data::{ENERGY_INTAKE_POST, ENERGY_INTAKE_PRE, EXPENDITURE_LEAN, EXPENDITURE_OBESE};
use crate::one_sample::t_test_1samp;
use crate::types::TestResult;

fn standard_normal() -> Result<Normal> {
    Ok(Normal::new(0.0, 1.0)?)
}

fn check_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Two-sided t-test for two independent samples with pooled variance
pub fn t_test_ind(a: &[f64], b: &[f64]) -> Result<TestResult> {
    check_finite(a, "first sample")?;
    check_finite(b, "second sample")?;
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    if a.is_empty() || b.is_empty() || a.len() + b.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: a.len() + b.len(),
        });
    }
    let df = n1 + n2 - 2.0;
    let pooled = (sum_of_squares(a) + sum_of_squares(b)) / df;
    let se = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se == 0.0 {
        return Err(Error::Computation("samples have zero variance".to_string()));
    }
    let t = (mean(a) - mean(b)) / se;
    let dist = StudentsT::new(0.0, 1.0, df)?;
    Ok(TestResult::new(t, 2.0 * dist.sf(t.abs())))
}

/// Two-sided paired t-test
pub fn t_test_rel(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired samples"));
    }
    let diff: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    t_test_1samp(&diff, 0.0)
}

/// Wilcoxon signed-rank test of paired samples
///
/// Zero differences are discarded. The statistic is the smaller of the
/// positive and negative rank sums; the two-sided p-value comes from the
/// normal approximation with tie-corrected variance and no continuity
/// correction.
pub fn wilcoxon_signed_rank(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired samples"));
    }
    check_finite(x, "first sample")?;
    check_finite(y, "second sample")?;

    let diff: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diff.is_empty() {
        return Err(Error::Computation("all paired differences are zero".to_string()));
    }

    let magnitudes: Vec<f64> = diff.iter().map(|d| d.abs()).collect();
    let (ranks, tie_term) = ranks_with_ties(&magnitudes);
    let r_plus: f64 = diff
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();
    let r_minus: f64 = diff
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d < 0.0)
        .map(|(_, r)| r)
        .sum();
    let statistic = r_plus.min(r_minus);

    let n = diff.len() as f64;
    let expected = n * (n + 1.0) / 4.0;
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term / 48.0;
    if variance <= 0.0 {
        return Err(Error::Computation("signed-rank variance is zero".to_string()));
    }
    let z = (statistic - expected) / variance.sqrt();
    let p = 2.0 * standard_normal()?.cdf(-z.abs());
    debug!(n = diff.len(), statistic, z, p, "Wilcoxon signed-rank");
    Ok(TestResult::new(statistic, p))
}

/// One-sided Mann-Whitney U test of two independent samples
///
/// The statistic is the smaller U. The p-value uses the normal
/// approximation with tie correction and a continuity correction of 0.5.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::empty_input());
    }
    check_finite(x, "first sample")?;
    check_finite(y, "second sample")?;

    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let total = n1 + n2;
    let pooled: Vec<f64> = x.iter().chain(y).copied().collect();
    let (ranks, tie_term) = ranks_with_ties(&pooled);
    let rank_sum_x: f64 = ranks[..x.len()].iter().sum();

    let u1 = n1 * n2 + n1 * (n1 + 1.0) / 2.0 - rank_sum_x;
    let u2 = n1 * n2 - u1;
    let small_u = u1.min(u2);
    let big_u = u1.max(u2);

    let sd = (n1 * n2 / 12.0 * ((total + 1.0) - tie_term / (total * (total - 1.0)))).sqrt();
    if !(sd > 0.0) {
        return Err(Error::Computation("all values are tied".to_string()));
    }
    let z = ((big_u - 0.5 - n1 * n2 / 2.0) / sd).abs();
    let p = standard_normal()?.sf(z);
    debug!(u = small_u, z, p, "Mann-Whitney U");
    Ok(TestResult::new(small_u, p))
}

/// Did the energy intake change after menstruation?
pub fn paired_data() -> Result<TestResult> {
    let t = t_test_rel(&ENERGY_INTAKE_PRE, &ENERGY_INTAKE_POST)?;
    debug!(t = t.statistic, p = t.p_value, "paired t-test");
    wilcoxon_signed_rank(&ENERGY_INTAKE_PRE, &ENERGY_INTAKE_POST)
}

/// Do lean and obese women differ in energy expenditure?
pub fn unpaired_data() -> Result<TestResult> {
    let t = t_test_ind(&EXPENDITURE_LEAN, &EXPENDITURE_OBESE)?;
    debug!(t = t.statistic, p = t.p_value, "unpaired t-test");
    mann_whitney_u(&EXPENDITURE_LEAN, &EXPENDITURE_OBESE)
}
