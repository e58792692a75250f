//! Kernel density estimates against the exact density

use statrs::distribution::{Continuous, Normal};
use statsintro_core::Result;
use statsintro_plot::{printout_plain, Axes, Color, Figure, LineStyle, OutputConfig};
use tracing::debug;

use super::{default_style, linspace, normal_sample, seeded_rng};
use crate::kde::{silverman_factor, GaussianKde};

const SAMPLES: usize = 100;
const RUG_HEIGHT: f64 = 0.01;

/// Histogram with KDE and rug, next to the exact pdf and KDEs with a
/// small, a rule-of-thumb and a large bandwidth factor
pub fn kde_plot(output: &OutputConfig) -> Result<()> {
    let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, SAMPLES)?;
    let x = linspace(-5.0, 5.0, 101);
    let exact = Normal::new(0.0, 1.0)?;
    let pdf: Vec<f64> = x.iter().map(|&v| exact.pdf(v)).collect();

    let (width, _) = output.figure_size;
    let mut fig = Figure::subplots(&default_style(), 1, 2)?.with_size(width * 1.5, 5.0);

    let scott = GaussianKde::scott(&data)?;
    let left = fig.sca(0)?;
    left.hist(&data, 15, true);
    left.line(&x, &scott.evaluate(&x));
    for &v in &data {
        left.vlines(v, 0.0, RUG_HEIGHT);
    }
    left.set_xlim(-5.0, 5.0).set_title("Histogram and KDE");

    bandwidth_panel(fig.sca(1)?, &data, &x, &pdf)?;

    printout_plain(fig, "kdePlot.png", output)
}

/// Exact pdf against KDEs with the rule-of-thumb, a small and a large factor
fn bandwidth_panel(ax: &mut Axes, data: &[f64], x: &[f64], pdf: &[f64]) -> Result<()> {
    let factor = silverman_factor(data.len());
    let rule = GaussianKde::new(data, factor)?;
    let small = GaussianKde::new(data, 0.1)?;
    let large = GaussianKde::new(data, 1.0)?;
    debug!(factor, bandwidth = rule.bandwidth(), "KDE bandwidth");

    ax.line(x, pdf).label("exact");
    ax.line(x, &rule.evaluate(x))
        .color(Color::RED)
        .label(format!("KDE (h = {factor:4.2})"));
    ax.line(x, &small.evaluate(x))
        .color(Color::gray(0.8))
        .line_style(LineStyle::Dashed)
        .label("KDE (h = 0.1)");
    ax.line(x, &large.evaluate(x))
        .line_style(LineStyle::Dashed)
        .label("KDE (h = 1.0)");
    ax.set_xlim(-5.0, 5.0).set_ylim(0.0, 0.4).legend();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_bandwidth_is_light_grey() {
        let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, 40).unwrap();
        let x = linspace(-5.0, 5.0, 11);
        let pdf = vec![0.0; x.len()];
        let mut ax = Axes::new();
        bandwidth_panel(&mut ax, &data, &x, &pdf).unwrap();

        let small = &ax.series()[2];
        assert_eq!(small.label.as_deref(), Some("KDE (h = 0.1)"));
        assert_eq!(small.color, Color::gray(0.8));
        assert_eq!(small.line_style, LineStyle::Dashed);
        assert!(ax.has_legend());
    }
}
