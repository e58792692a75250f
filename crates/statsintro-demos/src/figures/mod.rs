//! Figure demos
//!
//! Every demo draws from a fixed seed, writes its PNG files into the
//! configured output directory and returns once they are saved (and shown,
//! when the output asks for it).

mod anova;
mod basic;
mod distributions;
mod kde;
mod lifetimes;
mod sampling;

pub use anova::{anova_annotated, AnnotatedGroups};
pub use basic::{
    bar_plot, box_plot, error_bars, histograms, kde_figure, residuals, scatter_plot, BoxSummary,
};
pub use distributions::distributions;
pub use kde::kde_plot;
pub use lifetimes::{lifetimes, simulate_lifetimes, Lifetime, STUDY_END};
pub use sampling::{central_limit_theorem, chunk_means};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use statsintro_core::{Error, Result};
use statsintro_plot::style::{configure, Style, DEFAULT_FONT_SIZE};

/// Seed shared by the figure demos
pub const SEED: u64 = 12345;

pub(crate) fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

pub(crate) fn default_style() -> Style {
    configure(DEFAULT_FONT_SIZE)
}

/// `n` draws from a normal distribution
pub(crate) fn normal_sample<R: rand::Rng>(
    rng: &mut R,
    mean: f64,
    sd: f64,
    n: usize,
) -> Result<Vec<f64>> {
    if !(sd >= 0.0 && sd.is_finite()) {
        return Err(Error::InvalidParameter(format!(
            "standard deviation must be finite and non-negative, got {sd}"
        )));
    }
    let dist = Normal::new(mean, sd).map_err(|e| Error::InvalidParameter(e.to_string()))?;
    Ok(dist.sample_iter(rng).take(n).collect())
}

/// `start, start + step, ...` below `stop`
pub(crate) fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `n` evenly spaced values from `start` to `stop` inclusive
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arange() {
        let v = arange(0.0, 1.0, 0.25);
        assert_eq!(v.len(), 4);
        assert_abs_diff_eq!(v[3], 0.75, epsilon = 1e-12);
        assert!(arange(1.0, 0.0, 0.1).is_empty());
    }

    #[test]
    fn test_linspace() {
        let v = linspace(-5.0, 5.0, 101);
        assert_eq!(v.len(), 101);
        assert_abs_diff_eq!(v[0], -5.0);
        assert_abs_diff_eq!(v[50], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[100], 5.0, epsilon = 1e-12);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn test_normal_sample_is_reproducible() {
        let a = normal_sample(&mut seeded_rng(), 0.0, 1.0, 10).unwrap();
        let b = normal_sample(&mut seeded_rng(), 0.0, 1.0, 10).unwrap();
        assert_eq!(a, b);
        assert!(matches!(
            normal_sample(&mut seeded_rng(), 0.0, -1.0, 10),
            Err(Error::InvalidParameter(_))
        ));
        assert!(normal_sample(&mut seeded_rng(), 0.0, f64::NAN, 10).is_err());
        assert_eq!(normal_sample(&mut seeded_rng(), 3.0, 0.0, 2).unwrap(), vec![3.0, 3.0]);
    }
}
