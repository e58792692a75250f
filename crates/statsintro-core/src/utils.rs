//! Utility functions for working with data slices

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use statsintro_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    // total_cmp puts negative NaN first; move every NaN to the back
    let (mut values, nans): (Vec<f64>, Vec<f64>) = sorted.into_iter().partition(|x| !x.is_nan());
    values.extend(nans);
    values
}

/// Quantile `q` of the data, interpolating linearly between order statistics
///
/// Position `q * (n - 1)` in the sorted data, the rule `matplotlib`'s box
/// plots use.
///
/// ```rust
/// use statsintro_core::utils::quantile;
///
/// let data = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(quantile(&data, 0.5).unwrap(), 2.5);
/// assert_eq!(quantile(&data, 0.25).unwrap(), 1.75);
/// ```
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidParameter(format!(
            "quantile {q} must be in [0, 1]"
        )));
    }
    Ok(quantile_of_sorted(&finite_sorted(data)?, q))
}

/// First, second and third quartile
pub fn quartiles(data: &[f64]) -> Result<[f64; 3]> {
    let values = finite_sorted(data)?;
    Ok([0.25, 0.5, 0.75].map(|q| quantile_of_sorted(&values, q)))
}

fn finite_sorted(data: &[f64]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("quantile data"));
    }
    Ok(sorted(data))
}

fn quantile_of_sorted(values: &[f64], q: f64) -> f64 {
    let pos = q * (values.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    values[lo] + (pos - lo as f64) * (values[hi] - values[lo])
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// ```rust
/// use statsintro_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sum of squared deviations from the mean
pub fn sum_of_squares(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum()
}

/// Variance with `ddof` delta degrees of freedom
///
/// Returns 0.0 when `data.len() <= ddof`.
pub fn variance(data: &[f64], ddof: usize) -> f64 {
    if data.len() <= ddof {
        return 0.0;
    }
    sum_of_squares(data) / (data.len() - ddof) as f64
}

/// Calculate the sample standard deviation (ddof = 1)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// ```rust
/// use statsintro_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data, 1).sqrt()
}

/// Keep only the pairs where both coordinates are finite
///
/// Returns the filtered x and y vectors.
pub fn finite_pairs(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired data"));
    }
    Ok(x.iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .unzip())
}

/// Average ranks (1-based) of the values, ties sharing the mean rank
///
/// Also returns the tie term `sum(t^3 - t)` over all groups of `t` tied
/// values, which rank-based tests use to correct their variance.
pub fn ranks_with_ties(data: &[f64]) -> (Vec<f64>, f64) {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0.0; data.len()];
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && data[order[end]] == data[order[start]] {
            end += 1;
        }
        // positions start..end (0-based) share ranks start+1..=end
        let shared = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = shared;
        }
        let t = (end - start) as f64;
        tie_term += t * t * t - t;
        start = end;
    }
    (ranks, tie_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, -f64::NAN, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
        assert!(sorted_data[4].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = [7.0, 1.0, 3.0, 5.0, 9.0];
        assert_eq!(quantile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(quantile(&data, 1.0).unwrap(), 9.0);
        assert_eq!(quantile(&data, 0.5).unwrap(), 5.0);
        assert_abs_diff_eq!(quantile(&data, 0.1).unwrap(), 1.8, epsilon = 1e-12);
        assert_eq!(quantile(&[2.5], 0.75).unwrap(), 2.5);
    }

    #[test]
    fn test_quartiles() {
        let data: Vec<f64> = (1..=8).map(f64::from).collect();
        let [q1, q2, q3] = quartiles(&data).unwrap();
        assert_abs_diff_eq!(q1, 2.75, epsilon = 1e-12);
        assert_abs_diff_eq!(q2, 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(q3, 6.25, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_rejects_bad_input() {
        assert!(matches!(quantile(&[1.0], 1.5), Err(Error::InvalidParameter(_))));
        assert!(matches!(quantile(&[], 0.5), Err(Error::InsufficientData { .. })));
        assert!(matches!(quartiles(&[1.0, f64::NAN]), Err(Error::Computation(_))));
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
        assert_abs_diff_eq!(std_dev(&[1.0, 3.0]), std::f64::consts::SQRT_2, epsilon = 1e-12);
        assert_eq!(std_dev(&[42.0]), 0.0);
        assert_eq!(std_dev(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_variance_ddof() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(variance(&data, 0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(variance(&data, 1), 2.5, epsilon = 1e-12);
        assert_eq!(variance(&[1.0], 1), 0.0);
        assert_abs_diff_eq!(sum_of_squares(&data), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates_through_mean() {
        let data = [1.0, 2.0, f64::NAN, 4.0];
        assert!(mean(&data).is_nan());
        assert!(std_dev(&data).is_nan());
    }

    #[test]
    fn test_finite_pairs_drops_incomplete_rows() {
        let x = [1.0, 2.0, f64::NAN, 4.0, 5.0];
        let y = [1.5, f64::NAN, 3.5, 4.5, f64::INFINITY];
        let (fx, fy) = finite_pairs(&x, &y).unwrap();
        assert_eq!(fx, vec![1.0, 4.0]);
        assert_eq!(fy, vec![1.5, 4.5]);
    }

    #[test]
    fn test_finite_pairs_length_mismatch() {
        assert!(finite_pairs(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_ranks_without_ties() {
        let (ranks, ties) = ranks_with_ties(&[30.0, 10.0, 20.0]);
        assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
        assert_eq!(ties, 0.0);
    }

    #[test]
    fn test_ranks_with_ties() {
        let (ranks, ties) = ranks_with_ties(&[7.48, 6.13, 7.48, 8.0, 7.48]);
        // three values share ranks 2, 3, 4
        assert_eq!(ranks, vec![3.0, 1.0, 3.0, 5.0, 3.0]);
        assert_eq!(ties, 24.0);
    }
}
