//! Gaussian kernel density estimation

use std::f64::consts::PI;

use statsintro_core::utils::std_dev;
use statsintro_core::{Error, Result};

/// Scott's rule bandwidth factor for `n` observations: `n^(-1/5)`
pub fn scott_factor(n: usize) -> f64 {
    (n as f64).powf(-0.2)
}

/// Silverman's rule bandwidth factor for `n` observations: `(4 / 3n)^(1/5)`
pub fn silverman_factor(n: usize) -> f64 {
    (4.0 / (3.0 * n as f64)).powf(0.2)
}

/// Kernel density estimate with a Gaussian kernel
///
/// The kernel standard deviation is the bandwidth factor times the sample
/// standard deviation (ddof 1).
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKde {
    data: Vec<f64>,
    factor: f64,
    bandwidth: f64,
}

impl GaussianKde {
    /// Estimate with an explicit bandwidth factor
    pub fn new(data: &[f64], factor: f64) -> Result<Self> {
        if data.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("KDE data"));
        }
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "bandwidth factor {factor} must be positive"
            )));
        }
        let bandwidth = factor * std_dev(data);
        if bandwidth == 0.0 {
            return Err(Error::Computation("KDE data has zero variance".to_string()));
        }
        Ok(Self {
            data: data.to_vec(),
            factor,
            bandwidth,
        })
    }

    /// Estimate with Scott's rule
    pub fn scott(data: &[f64]) -> Result<Self> {
        Self::new(data, scott_factor(data.len()))
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Standard deviation of the kernel
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimated density at `x`
    pub fn density(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = self.data.len() as f64 * h * (2.0 * PI).sqrt();
        self.data
            .iter()
            .map(|&xi| (-0.5 * ((x - xi) / h).powi(2)).exp())
            .sum::<f64>()
            / norm
    }

    /// Estimated density at every point of `xs`
    pub fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.density(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_factors() {
        assert_abs_diff_eq!(scott_factor(100), 0.3981071705534972, epsilon = 1e-12);
        assert_abs_diff_eq!(silverman_factor(100), 0.42168460634274996, epsilon = 1e-12);
    }

    #[test]
    fn test_density_value() {
        let kde = GaussianKde::scott(&[-1.0, 0.0, 2.0]).unwrap();
        assert_abs_diff_eq!(kde.bandwidth(), 1.226207990084442, epsilon = 1e-12);
        assert_abs_diff_eq!(kde.density(0.5), 0.20243610883470523, epsilon = 1e-12);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let kde = GaussianKde::new(&[0.3, 1.1, 1.7, 2.9, 4.0], 0.5).unwrap();
        let step = 0.01;
        let area: f64 = (0..2000)
            .map(|i| -8.0 + step * i as f64)
            .map(|x| kde.density(x) * step)
            .sum();
        assert_abs_diff_eq!(area, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_data() {
        assert!(GaussianKde::scott(&[1.0]).is_err());
        assert!(GaussianKde::scott(&[1.0, 1.0]).is_err());
        assert!(GaussianKde::new(&[1.0, 2.0], 0.0).is_err());
        assert!(GaussianKde::new(&[1.0, f64::NAN], 1.0).is_err());
    }
}
