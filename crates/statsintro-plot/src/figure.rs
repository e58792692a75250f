//! In-memory figures and axes
//!
//! A [`Figure`] owns a grid of [`Axes`] panels and the [`Style`] it was
//! created with. Nothing here touches the plotting backend: drawing happens
//! in [`crate::render`] once the figure is complete.

use crate::color::{cycle_color, Color};
use crate::style::Style;
use statsintro_core::{Error, Result};

/// Relative margin added on each side of auto-scaled data limits
pub const AUTO_MARGIN: f64 = 0.05;

/// Default figure size in inches (width, height)
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (8.0, 6.0);

/// Line dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Dash and gap lengths as multiples of the line width, `None` when solid
    pub fn pattern(&self) -> Option<(f64, f64)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((3.7, 1.6)),
            LineStyle::Dotted => Some((1.0, 1.65)),
        }
    }
}

/// One side of the plotting area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Visibility of the four spines (the border lines of the plotting area)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spines {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }
}

impl Spines {
    pub fn is_visible(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    fn hide(&mut self, side: Side) {
        match side {
            Side::Left => self.left = false,
            Side::Right => self.right = false,
            Side::Top => self.top = false,
            Side::Bottom => self.bottom = false,
        }
    }
}

/// What a series draws
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesKind {
    /// Polyline through the points
    Line { x: Vec<f64>, y: Vec<f64> },
    /// Filled markers, `size` is the marker diameter in points
    Scatter { x: Vec<f64>, y: Vec<f64>, size: f64 },
    /// Bars from `y = 0`, each spanning `[left, left + width]`
    Bars {
        left: Vec<f64>,
        width: Vec<f64>,
        height: Vec<f64>,
    },
    /// Horizontal reference line at `y` from `xmin` to `xmax`
    HLine { y: f64, xmin: f64, xmax: f64 },
    /// Vertical reference line at `x` from `ymin` to `ymax`
    VLine { x: f64, ymin: f64, ymax: f64 },
    /// Markers with symmetric vertical error bars
    ErrorBar { x: Vec<f64>, y: Vec<f64>, err: Vec<f64> },
    /// Text anchored at a data coordinate, `size` in points
    Text {
        x: f64,
        y: f64,
        text: String,
        size: Option<f64>,
    },
}

impl SeriesKind {
    /// Data bounds `((xmin, xmax), (ymin, ymax))` over finite values
    ///
    /// Text does not take part in auto-scaling.
    fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut b = Bounds::default();
        match self {
            SeriesKind::Line { x, y } | SeriesKind::Scatter { x, y, .. } => {
                for (&xi, &yi) in x.iter().zip(y) {
                    b.add(xi, yi);
                }
            }
            SeriesKind::Bars {
                left,
                width,
                height,
            } => {
                for ((&l, &w), &h) in left.iter().zip(width).zip(height) {
                    b.add(l, 0.0);
                    b.add(l + w, h);
                }
            }
            SeriesKind::HLine { y, xmin, xmax } => {
                b.add(*xmin, *y);
                b.add(*xmax, *y);
            }
            SeriesKind::VLine { x, ymin, ymax } => {
                b.add(*x, *ymin);
                b.add(*x, *ymax);
            }
            SeriesKind::ErrorBar { x, y, err } => {
                for ((&xi, &yi), &e) in x.iter().zip(y).zip(err) {
                    b.add(xi, yi - e.abs());
                    b.add(xi, yi + e.abs());
                }
            }
            SeriesKind::Text { .. } => {}
        }
        b.finish()
    }
}

#[derive(Default)]
struct Bounds {
    x: Option<(f64, f64)>,
    y: Option<(f64, f64)>,
}

impl Bounds {
    fn add(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.x = Some(match self.x {
            Some((lo, hi)) => (lo.min(x), hi.max(x)),
            None => (x, x),
        });
        self.y = Some(match self.y {
            Some((lo, hi)) => (lo.min(y), hi.max(y)),
            None => (y, y),
        });
    }

    fn finish(self) -> Option<((f64, f64), (f64, f64))> {
        Some((self.x?, self.y?))
    }
}

/// A drawable series plus its presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub color: Color,
    pub line_style: LineStyle,
    /// Line width in points
    pub width: f64,
    /// Legend entry
    pub label: Option<String>,
}

impl Series {
    fn new(kind: SeriesKind, color: Color) -> Self {
        Self {
            kind,
            color,
            line_style: LineStyle::Solid,
            width: 1.5,
            label: None,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn line_style(&mut self, line_style: LineStyle) -> &mut Self {
        self.line_style = line_style;
        self
    }

    pub fn width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }

    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }
}

/// Histogram bin edges and heights
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` increasing edges
    pub edges: Vec<f64>,
    /// Counts, or densities when requested
    pub heights: Vec<f64>,
}

/// Bin the finite values of `data` into `bins` equal-width bins
///
/// The last bin is closed on the right. With `density` the heights
/// integrate to one. Zero bins are treated as one.
pub fn histogram(data: &[f64], bins: usize, density: bool) -> Histogram {
    let bins = bins.max(1);
    let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if finite.is_empty() {
        lo = 0.0;
        hi = 1.0;
    } else if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let step = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + step * i as f64).collect();
    let mut heights = vec![0.0; bins];
    for &v in &finite {
        let idx = (((v - lo) / step) as usize).min(bins - 1);
        heights[idx] += 1.0;
    }
    if density && !finite.is_empty() {
        let norm = finite.len() as f64 * step;
        for h in &mut heights {
            *h /= norm;
        }
    }
    Histogram { edges, heights }
}

/// Auto-scaled limits for a data range
///
/// Adds [`AUTO_MARGIN`] on both sides. A single value is padded by 5% of
/// its magnitude, or by 0.5 when it is zero.
pub fn auto_limits(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => {
            let pad = if lo == 0.0 { 0.5 } else { lo.abs() * AUTO_MARGIN };
            (lo - pad, hi + pad)
        }
        Some((lo, hi)) => {
            let pad = (hi - lo) * AUTO_MARGIN;
            (lo - pad, hi + pad)
        }
    }
}

/// One plotting surface of a figure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    series: Vec<Series>,
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
    spines: Spines,
    x_tick_side: XTickSide,
    y_tick_side: YTickSide,
    legend: bool,
    color_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum XTickSide {
    #[default]
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum YTickSide {
    #[default]
    Left,
    Right,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_color(&mut self) -> Color {
        let color = cycle_color(self.color_index);
        self.color_index += 1;
        color
    }

    fn push(&mut self, series: Series) -> &mut Series {
        self.series.push(series);
        let last = self.series.len() - 1;
        &mut self.series[last]
    }

    fn push_cycled(&mut self, kind: SeriesKind) -> &mut Series {
        let color = self.next_color();
        self.push(Series::new(kind, color))
    }

    /// Line through `(x[i], y[i])`; extra values of the longer slice are ignored
    pub fn line(&mut self, x: &[f64], y: &[f64]) -> &mut Series {
        let n = x.len().min(y.len());
        self.push_cycled(SeriesKind::Line {
            x: x[..n].to_vec(),
            y: y[..n].to_vec(),
        })
    }

    /// Scatter markers of 6 points diameter
    pub fn scatter(&mut self, x: &[f64], y: &[f64]) -> &mut Series {
        let n = x.len().min(y.len());
        self.push_cycled(SeriesKind::Scatter {
            x: x[..n].to_vec(),
            y: y[..n].to_vec(),
            size: 6.0,
        })
    }

    /// Bars centred on `x` with a common `width`
    pub fn bars(&mut self, x: &[f64], height: &[f64], width: f64) -> &mut Series {
        let n = x.len().min(height.len());
        self.push_cycled(SeriesKind::Bars {
            left: x[..n].iter().map(|&c| c - width / 2.0).collect(),
            width: vec![width; n],
            height: height[..n].to_vec(),
        })
    }

    /// Histogram of `data` drawn as adjacent bars
    pub fn hist(&mut self, data: &[f64], bins: usize, density: bool) -> &mut Series {
        let Histogram { edges, heights } = histogram(data, bins, density);
        let width = edges.windows(2).map(|w| w[1] - w[0]).collect();
        self.push_cycled(SeriesKind::Bars {
            left: edges[..heights.len()].to_vec(),
            width,
            height: heights,
        })
    }

    pub fn hlines(&mut self, y: f64, xmin: f64, xmax: f64) -> &mut Series {
        self.push(Series::new(SeriesKind::HLine { y, xmin, xmax }, Color::BLACK))
    }

    pub fn vlines(&mut self, x: f64, ymin: f64, ymax: f64) -> &mut Series {
        self.push(Series::new(SeriesKind::VLine { x, ymin, ymax }, Color::BLACK))
    }

    /// Markers at `(x, y)` with error bars of half-length `err`
    pub fn errorbar(&mut self, x: &[f64], y: &[f64], err: &[f64]) -> &mut Series {
        let n = x.len().min(y.len()).min(err.len());
        self.push_cycled(SeriesKind::ErrorBar {
            x: x[..n].to_vec(),
            y: y[..n].to_vec(),
            err: err[..n].to_vec(),
        })
    }

    /// Text at a data coordinate in the axes label font size
    pub fn text(&mut self, x: f64, y: f64, text: impl Into<String>) -> &mut Series {
        self.push(Series::new(
            SeriesKind::Text {
                x,
                y,
                text: text.into(),
                size: None,
            },
            Color::BLACK,
        ))
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = label.into();
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = label.into();
        self
    }

    /// Fix the x view limits; `min == max` is stored unchanged
    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_lim = Some((min, max));
        self
    }

    fn data_bounds(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        let mut x: Option<(f64, f64)> = None;
        let mut y: Option<(f64, f64)> = None;
        let merge = |acc: Option<(f64, f64)>, (lo, hi): (f64, f64)| match acc {
            Some((a, b)) => Some((a.min(lo), b.max(hi))),
            None => Some((lo, hi)),
        };
        for (xb, yb) in self.series.iter().filter_map(|s| s.kind.bounds()) {
            x = merge(x, xb);
            y = merge(y, yb);
        }
        (x, y)
    }

    /// Current x view limits: explicit limits, else auto-scaled from the data
    pub fn x_limits(&self) -> (f64, f64) {
        self.x_lim.unwrap_or_else(|| auto_limits(self.data_bounds().0))
    }

    /// Current y view limits: explicit limits, else auto-scaled from the data
    pub fn y_limits(&self) -> (f64, f64) {
        self.y_lim.unwrap_or_else(|| auto_limits(self.data_bounds().1))
    }

    /// Hide the spine on `side` and move that axis' ticks to the opposite side
    ///
    /// Other spines are left as they are.
    pub fn despine(&mut self, side: Side) -> &mut Self {
        self.spines.hide(side);
        match side {
            Side::Right => self.y_tick_side = YTickSide::Left,
            Side::Left => self.y_tick_side = YTickSide::Right,
            Side::Top => self.x_tick_side = XTickSide::Bottom,
            Side::Bottom => self.x_tick_side = XTickSide::Top,
        }
        self
    }

    pub fn spines(&self) -> Spines {
        self.spines
    }

    /// Side carrying the x ticks and tick labels
    pub fn x_tick_side(&self) -> Side {
        match self.x_tick_side {
            XTickSide::Bottom => Side::Bottom,
            XTickSide::Top => Side::Top,
        }
    }

    /// Side carrying the y ticks and tick labels
    pub fn y_tick_side(&self) -> Side {
        match self.y_tick_side {
            YTickSide::Left => Side::Left,
            YTickSide::Right => Side::Right,
        }
    }

    /// Show a legend of the labelled series
    pub fn legend(&mut self) -> &mut Self {
        self.legend = true;
        self
    }

    pub fn has_legend(&self) -> bool {
        self.legend && self.series.iter().any(|s| s.label.is_some())
    }
}

/// A figure: a `rows x cols` grid of axes drawn with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    style: Style,
    rows: usize,
    cols: usize,
    axes: Vec<Axes>,
    current: usize,
    size: Option<(f64, f64)>,
}

impl Figure {
    /// Figure with a single axes
    ///
    /// The style is copied; later style changes do not affect this figure.
    pub fn new(style: &Style) -> Self {
        Self {
            style: style.clone(),
            rows: 1,
            cols: 1,
            axes: vec![Axes::new()],
            current: 0,
            size: None,
        }
    }

    /// Figure with a `rows x cols` grid of axes, filled row by row
    ///
    /// The last panel is the current axes.
    pub fn subplots(style: &Style, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidParameter(format!(
                "subplot grid {rows}x{cols} must have at least one panel"
            )));
        }
        let count = rows * cols;
        Ok(Self {
            style: style.clone(),
            rows,
            cols,
            axes: vec![Axes::new(); count],
            current: count - 1,
            size: None,
        })
    }

    /// Use a size in inches instead of the output default
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    /// The current axes
    pub fn gca(&mut self) -> &mut Axes {
        &mut self.axes[self.current]
    }

    /// Make panel `index` (row-major) the current axes
    pub fn sca(&mut self, index: usize) -> Result<&mut Axes> {
        if index >= self.axes.len() {
            return Err(Error::InvalidParameter(format!(
                "axes index {index} out of range for {} panels",
                self.axes.len()
            )));
        }
        self.current = index;
        Ok(&mut self.axes[index])
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Grid shape `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn size(&self) -> Option<(f64, f64)> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::configure;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_auto_limits() {
        assert_eq!(auto_limits(None), (0.0, 1.0));
        assert_eq!(auto_limits(Some((0.0, 0.0))), (-0.5, 0.5));
        let (lo, hi) = auto_limits(Some((10.0, 10.0)));
        assert_abs_diff_eq!(lo, 9.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 10.5, epsilon = 1e-12);
        let (lo, hi) = auto_limits(Some((0.0, 20.0)));
        assert_abs_diff_eq!(lo, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_limits_follow_data_until_fixed() {
        let mut ax = Axes::new();
        assert_eq!(ax.x_limits(), (0.0, 1.0));

        ax.line(&[0.0, 10.0], &[1.0, 3.0]);
        let (lo, hi) = ax.x_limits();
        assert_abs_diff_eq!(lo, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 10.5, epsilon = 1e-12);

        ax.set_xlim(2.0, 2.0);
        assert_eq!(ax.x_limits(), (2.0, 2.0));
    }

    #[test]
    fn test_non_finite_points_are_ignored_for_limits() {
        let mut ax = Axes::new();
        ax.scatter(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, f64::INFINITY]);
        let (lo, hi) = ax.x_limits();
        assert_abs_diff_eq!(lo, 0.95, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_bars_include_zero() {
        let mut ax = Axes::new();
        ax.bars(&[1.0, 2.0], &[4.0, 5.0], 0.5);
        let (lo, _) = ax.y_limits();
        assert!(lo < 0.0);
    }

    #[test]
    fn test_despine_right_moves_y_ticks_left() {
        let mut ax = Axes::new();
        ax.despine(Side::Right);
        let spines = ax.spines();
        assert!(!spines.right);
        assert!(spines.left && spines.top && spines.bottom);
        assert_eq!(ax.y_tick_side(), Side::Left);

        ax.despine(Side::Left);
        assert!(!ax.spines().left);
        assert_eq!(ax.y_tick_side(), Side::Right);

        ax.despine(Side::Bottom);
        assert_eq!(ax.x_tick_side(), Side::Top);
        ax.despine(Side::Top);
        assert_eq!(ax.x_tick_side(), Side::Bottom);
        assert!(!ax.spines().is_visible(Side::Top));
    }

    #[test]
    fn test_series_setters_and_color_cycle() {
        let mut ax = Axes::new();
        ax.line(&[0.0, 1.0], &[0.0, 1.0]);
        ax.line(&[0.0, 1.0], &[1.0, 0.0])
            .line_style(LineStyle::Dashed)
            .width(2.0)
            .label("falling");
        let series = ax.series();
        assert_eq!(series[0].color, cycle_color(0));
        assert_eq!(series[1].color, cycle_color(1));
        assert_eq!(series[1].line_style, LineStyle::Dashed);
        assert_eq!(series[1].label.as_deref(), Some("falling"));
    }

    #[test]
    fn test_legend_needs_a_label() {
        let mut ax = Axes::new();
        ax.line(&[0.0, 1.0], &[0.0, 1.0]);
        ax.legend();
        assert!(!ax.has_legend());
        ax.scatter(&[0.5], &[0.5]).label("point");
        assert!(ax.has_legend());
    }

    #[test]
    fn test_histogram_counts_and_density() {
        let data = [0.0, 0.5, 1.0, 1.5, 2.0, f64::NAN];
        let h = histogram(&data, 2, false);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0]);
        assert_eq!(h.heights, vec![2.0, 3.0]);

        let d = histogram(&data, 4, true);
        let area: f64 = d
            .heights
            .iter()
            .zip(d.edges.windows(2))
            .map(|(h, w)| h * (w[1] - w[0]))
            .sum();
        assert_abs_diff_eq!(area, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_histogram_degenerate_input() {
        let h = histogram(&[3.0, 3.0], 0, false);
        assert_eq!(h.edges, vec![2.5, 3.5]);
        assert_eq!(h.heights, vec![2.0]);
        assert_eq!(histogram(&[], 3, true).heights, vec![0.0; 3]);
    }

    #[test]
    fn test_figure_style_is_copied() {
        let mut style = configure(18.0);
        let fig = Figure::new(&style);
        style = style.with_font_size(10.0);
        assert_eq!(fig.style().font_size, 18.0);
        assert_eq!(style.font_size, 10.0);
    }

    #[test]
    fn test_subplots_current_axes() {
        let style = configure(12.0);
        assert!(Figure::subplots(&style, 0, 2).is_err());

        let mut fig = Figure::subplots(&style, 1, 3).unwrap();
        assert_eq!(fig.shape(), (1, 3));
        fig.gca().set_title("last");
        assert_eq!(fig.axes()[2].title, "last");

        fig.sca(0).unwrap().set_title("first");
        fig.gca().set_xlabel("x");
        assert_eq!(fig.axes()[0].x_label, "x");
        assert!(fig.sca(3).is_err());
    }
}
