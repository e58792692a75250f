//! Scatter plot, histograms, KDE, box and bar plots, error bars and
//! residuals

use rand::Rng;
use statsintro_core::utils::{quartiles, sorted};
use statsintro_core::{Error, Result};
use statsintro_plot::color::cycle_color;
use statsintro_plot::figure::histogram;
use statsintro_plot::{printout, printout_plain, Color, Figure, Labels, OutputConfig};
use tracing::debug;

use super::{arange, default_style, linspace, normal_sample, seeded_rng};
use crate::fit_line::fit_line;
use crate::kde::GaussianKde;

const SCATTER_POINTS: usize = 500;
const KDE_CUT: f64 = 3.0;
const KDE_GRID: usize = 200;
const WHISKER_REACH: f64 = 1.5;
const BOX_X: f64 = 1.0;
const BOX_HALF_WIDTH: f64 = 0.25;
const BAR_GROUPS: usize = 10;
const BAR_COLUMNS: [&str; 4] = ["a", "b", "c", "d"];
const BAR_GROUP_WIDTH: f64 = 0.8;

/// 500 normal values against their index
pub fn scatter_plot(output: &OutputConfig) -> Result<()> {
    let y = normal_sample(&mut seeded_rng(), 0.0, 1.0, SCATTER_POINTS)?;
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();

    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    ax.scatter(&x, &y);
    ax.set_xlim(0.0, SCATTER_POINTS as f64);

    printout(fig, "scatterPlot.png", &Labels::new("x", "y", "Scatter"), output)
}

/// Histograms of normal data, and its cumulative frequency
pub fn histograms(output: &OutputConfig) -> Result<()> {
    let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, SCATTER_POINTS)?;
    for (fig, file_name, labels) in histogram_figures(&data) {
        printout(fig, file_name, &labels, output)?;
    }
    Ok(())
}

fn histogram_figures(data: &[f64]) -> Vec<(Figure, &'static str, Labels)> {
    let style = default_style();

    let mut plain = Figure::new(&style);
    plain.gca().hist(data, 10, false);

    let mut fine = Figure::new(&style);
    fine.gca().hist(data, 25, false);

    let hist = histogram(data, 20, false);
    let cumulative: Vec<f64> = hist
        .heights
        .iter()
        .scan(0.0, |total, h| {
            *total += h;
            Some(*total)
        })
        .collect();
    let centres: Vec<f64> = hist.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    debug!(bins = centres.len(), total = ?cumulative.last(), "cumulative frequency");

    let mut cdf = Figure::new(&style);
    cdf.gca().line(&centres, &cumulative);

    vec![
        (
            plain,
            "histogram_plain.png",
            Labels::new("Data Values", "Frequency", "Histogram, default settings"),
        ),
        (
            fine,
            "histogram.png",
            Labels::new("Data Values", "Frequency", "Histogram, 25 bins"),
        ),
        (
            cdf,
            "CumulativeFrequencyFunction.png",
            Labels::new("Data Values", "CumFreq", "Cumulative Frequency Function"),
        ),
    ]
}

/// Gaussian KDE of the scatter data, drawn three bandwidths past its range
pub fn kde_figure(output: &OutputConfig) -> Result<()> {
    let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, SCATTER_POINTS)?;
    let kde = GaussianKde::scott(&data)?;
    let values = sorted(&data);
    let (lo, hi) = match (values.first(), values.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => return Err(Error::empty_input()),
    };
    let cut = KDE_CUT * kde.bandwidth();
    let x = linspace(lo - cut, hi + cut, KDE_GRID);

    let mut fig = Figure::new(&default_style());
    fig.gca().line(&x, &kde.evaluate(&x));
    printout(
        fig,
        "kde.png",
        &Labels::new("Data Values", "Density", "KDE_plot"),
        output,
    )
}

/// Quartiles, whisker ends and outliers of a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Most extreme values within 1.5 IQR of the box
    pub whiskers: (f64, f64),
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn new(data: &[f64]) -> Result<Self> {
        let [q1, median, q3] = quartiles(data)?;
        let reach = WHISKER_REACH * (q3 - q1);
        let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted(data)
            .into_iter()
            .partition(|&v| v >= q1 - reach && v <= q3 + reach);
        // the quartiles always lie inside, so `inside` is never empty
        let whiskers = match (inside.first(), inside.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (q1, q3),
        };
        Ok(Self {
            q1,
            median,
            q3,
            whiskers,
            outliers,
        })
    }
}

/// Vertical box plot of the scatter data, outliers as single points
pub fn box_plot(output: &OutputConfig) -> Result<()> {
    let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, SCATTER_POINTS)?;
    let summary = BoxSummary::new(&data)?;
    debug!(whiskers = ?summary.whiskers, outliers = summary.outliers.len(), "box plot");

    let (left, right) = (BOX_X - BOX_HALF_WIDTH, BOX_X + BOX_HALF_WIDTH);
    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    ax.line(
        &[left, right, right, left, left],
        &[summary.q1, summary.q1, summary.q3, summary.q3, summary.q1],
    )
    .color(Color::BLUE);
    ax.hlines(summary.median, left, right).color(Color::RED);
    let (low, high) = summary.whiskers;
    let cap = BOX_HALF_WIDTH / 2.0;
    for (end, edge) in [(low, summary.q1), (high, summary.q3)] {
        ax.vlines(BOX_X, end, edge).color(Color::BLACK);
        ax.hlines(end, BOX_X - cap, BOX_X + cap).color(Color::BLACK);
    }
    if !summary.outliers.is_empty() {
        let xs = vec![BOX_X; summary.outliers.len()];
        ax.scatter(&xs, &summary.outliers).color(Color::BLACK);
    }
    ax.set_xlim(0.5, 1.5);

    printout(fig, "boxplot.png", &Labels::new("Values", "", "Boxplot"), output)
}

/// Ten groups of four uniform values, one bar colour per column
pub fn bar_plot(output: &OutputConfig) -> Result<()> {
    let mut rng = seeded_rng();
    let groups: Vec<[f64; 4]> = (0..BAR_GROUPS).map(|_| rng.gen()).collect();

    let width = BAR_GROUP_WIDTH / BAR_COLUMNS.len() as f64;
    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    for (col, name) in BAR_COLUMNS.iter().enumerate() {
        let offset = (col as f64 + 0.5) * width - BAR_GROUP_WIDTH / 2.0;
        let x: Vec<f64> = (0..BAR_GROUPS).map(|g| g as f64 + offset).collect();
        let height: Vec<f64> = groups.iter().map(|row| row[col]).collect();
        ax.bars(&x, &height, width).color(cycle_color(col)).label(*name);
    }
    ax.set_xlim(-0.5, BAR_GROUPS as f64 - 0.5).legend();

    printout(fig, "barplot.png", &Labels::new("", "", "Barplot"), output)
}

/// `y = x^2` with error bars of half-length `x / 2`
pub fn error_bars(output: &OutputConfig) -> Result<()> {
    let x = arange(0.0, 5.0, 1.0);
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();
    let err: Vec<f64> = x.iter().map(|v| v / 2.0).collect();

    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    ax.errorbar(&x, &y, &err);
    ax.set_xlim(-0.2, 4.2).set_ylim(-0.2, 19.0);

    printout(
        fig,
        "Errorbars.png",
        &Labels::new("Data Values", "Measurements", "Errorbars"),
        output,
    )
}

/// Noisy line, its least squares fit and the residuals
pub fn residuals(output: &OutputConfig) -> Result<()> {
    let mut rng = seeded_rng();
    let x = arange(0.0, 10.0, 1.0);
    let y: Vec<f64> = x
        .iter()
        .map(|v| 3.0 * v + 2.0 + 20.0 * rng.gen::<f64>())
        .collect();

    let fit = fit_line(&x, &y, 0.05)?;
    debug!(intercept = fit.intercept, slope = fit.slope, "residual demo fit");
    let fitted: Vec<f64> = x.iter().map(|&v| fit.predict(v)).collect();

    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    ax.scatter(&x, &y);
    ax.line(&x, &fitted).color(Color::RED);
    for ((&xi, &yi), &fi) in x.iter().zip(&y).zip(&fitted) {
        ax.line(&[xi, xi], &[fi, yi]).color(Color::BLACK).width(1.0);
    }
    ax.set_xlim(-0.1, 9.1).set_xlabel("X").set_ylabel("Y");

    printout_plain(fig, "residuals.png", output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_figures_are_labelled() {
        let data = normal_sample(&mut seeded_rng(), 0.0, 1.0, 50).unwrap();
        let figures = histogram_figures(&data);
        let names: Vec<_> = figures.iter().map(|(_, name, _)| *name).collect();
        assert_eq!(
            names,
            ["histogram_plain.png", "histogram.png", "CumulativeFrequencyFunction.png"]
        );
        for (_, _, labels) in &figures {
            assert_eq!(labels.x, "Data Values");
        }
        assert_eq!(figures[0].2.title, "Histogram, default settings");
        assert_eq!(figures[1].2.title, "Histogram, 25 bins");
    }

    #[test]
    fn test_box_summary_splits_off_outliers() {
        let data = [30.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let summary = BoxSummary::new(&data).unwrap();
        assert_eq!((summary.q1, summary.median, summary.q3), (3.0, 5.0, 7.0));
        assert_eq!(summary.whiskers, (1.0, 8.0));
        assert_eq!(summary.outliers, vec![30.0]);
    }

    #[test]
    fn test_box_summary_of_constant_data() {
        let summary = BoxSummary::new(&[2.0; 5]).unwrap();
        assert_eq!(summary.whiskers, (2.0, 2.0));
        assert!(summary.outliers.is_empty());
        assert!(BoxSummary::new(&[]).is_err());
    }
}
