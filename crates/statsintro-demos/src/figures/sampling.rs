//! Central limit theorem: averaging uniform samples

use rand::Rng;
use statsintro_core::utils::mean;
use statsintro_core::Result;
use statsintro_plot::{printout_plain, Figure, OutputConfig};
use tracing::debug;

use super::{default_style, seeded_rng};

const DRAWS: usize = 100_000;
const BINS: usize = 50;

/// Means of consecutive, non-overlapping chunks of `size` values
///
/// A trailing partial chunk is dropped.
pub fn chunk_means(data: &[f64], size: usize) -> Vec<f64> {
    if size == 0 {
        return Vec::new();
    }
    data.chunks_exact(size).map(mean).collect()
}

/// Histograms of uniform data, of the mean of two and of the mean of ten
pub fn central_limit_theorem(output: &OutputConfig) -> Result<()> {
    let mut rng = seeded_rng();
    let data: Vec<f64> = (0..DRAWS).map(|_| rng.gen::<f64>()).collect();

    let panels = [
        ("Random Data", data.clone()),
        ("Average over 2", chunk_means(&data, 2)),
        ("Average over 10", chunk_means(&data, 10)),
    ];

    let (width, _) = output.figure_size;
    let mut fig = Figure::subplots(&default_style(), 1, panels.len())?.with_size(width * 1.5, 5.0);
    for (index, (title, values)) in panels.iter().enumerate() {
        debug!(panel = index, n = values.len(), "central limit panel");
        let ax = fig.sca(index)?;
        ax.hist(values, BINS, false);
        ax.set_title(*title).set_xlim(0.0, 1.0);
        if index == 0 {
            ax.set_ylabel("Counts");
        }
    }

    printout_plain(fig, "CentralLimitTheorem.png", output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chunk_means() {
        let data = [1.0, 3.0, 2.0, 4.0, 10.0];
        let means = chunk_means(&data, 2);
        assert_eq!(means.len(), 2);
        assert_abs_diff_eq!(means[0], 2.0);
        assert_abs_diff_eq!(means[1], 3.0);
        assert!(chunk_means(&data, 0).is_empty());
        assert!(chunk_means(&data, 6).is_empty());
    }

    #[test]
    fn test_averages_shrink_spread() {
        let mut rng = seeded_rng();
        let data: Vec<f64> = (0..10_000).map(|_| rng.gen::<f64>()).collect();
        let spread = |v: &[f64]| statsintro_core::utils::std_dev(v);
        let raw = spread(&data);
        let tens = spread(&chunk_means(&data, 10));
        // sd of the mean of 10 is sd / sqrt(10)
        assert_abs_diff_eq!(tens / raw, 1.0 / 10f64.sqrt(), epsilon = 0.03);
    }
}
