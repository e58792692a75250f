//! Binomial test: is the die fair?
//!
//! A die is thrown 235 times and shows a six `check_value` times.

use statrs::distribution::{Binomial, Discrete};
use statsintro_core::{Error, Result};
use tracing::debug;

/// Number of throws
pub const THROWS: u64 = 235;

/// Probability of a six on a fair die
pub const P_SIX: f64 = 1.0 / 6.0;

/// Relative tolerance when comparing probabilities of outcomes
const RELATIVE_ERROR: f64 = 1.0 + 1e-7;

/// p-values of a binomial test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialTest {
    /// `P(X >= k)`
    pub one_sided: f64,
    /// Probability of all outcomes at most as likely as `k`
    pub two_sided: f64,
}

/// Exact binomial test of `k` successes in `n` trials with success
/// probability `p`
pub fn binom_test(k: u64, n: u64, p: f64) -> Result<BinomialTest> {
    if k > n {
        return Err(Error::InvalidParameter(format!(
            "{k} successes exceed {n} trials"
        )));
    }
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid_probability("p", p));
    }
    let dist = Binomial::new(p, n)?;
    let pmf: Vec<f64> = (0..=n).map(|i| dist.pmf(i)).collect();

    let one_sided: f64 = pmf[k as usize..].iter().sum();
    let threshold = pmf[k as usize] * RELATIVE_ERROR;
    let two_sided: f64 = pmf.iter().filter(|&&q| q <= threshold).sum();

    Ok(BinomialTest {
        one_sided,
        two_sided: two_sided.min(1.0),
    })
}

/// Test whether `check_value` sixes in [`THROWS`] throws fit a fair die
pub fn binomial_test(check_value: u64) -> Result<BinomialTest> {
    let result = binom_test(check_value, THROWS, P_SIX)?;
    debug!(
        check_value,
        one_sided = result.one_sided,
        two_sided = result.two_sided,
        "binomial test"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fair_die() {
        let r = binomial_test(51).unwrap();
        assert_abs_diff_eq!(r.one_sided, 0.0265442457117, epsilon = 1e-9);
        assert_abs_diff_eq!(r.two_sided, 0.0437479701824, epsilon = 1e-9);
    }

    #[test]
    fn test_expected_count_is_not_significant() {
        // 235 / 6 = 39.2
        let r = binomial_test(39).unwrap();
        assert!(r.two_sided > 0.9);
        assert!(r.one_sided > 0.4);
    }

    #[test]
    fn test_small_exact_case() {
        // 3 heads in 3 fair throws: P(X >= 3) = 1/8, two-sided 1/4
        let r = binom_test(3, 3, 0.5).unwrap();
        assert_abs_diff_eq!(r.one_sided, 0.125, epsilon = 1e-12);
        assert_abs_diff_eq!(r.two_sided, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_input() {
        assert!(binom_test(4, 3, 0.5).is_err());
        assert!(binom_test(1, 3, 1.0).is_err());
    }
}
