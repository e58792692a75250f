//! Drawing figures with plotters
//!
//! Every axes becomes one chart on an evenly split bitmap. Sizes held in
//! points by the [`Style`] are converted to pixels with the output
//! resolution, so a figure keeps its proportions at any DPI.

use std::path::Path;

use plotters::chart::{ChartBuilder, ChartContext, LabelAreaPosition, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, DashedLineSeries, DrawingArea, DrawingBackend, ErrorBar,
    IntoDrawingArea, PathElement, Rectangle, Text,
};
use plotters::style::{Color as _, FontDesc, FontFamily as BackendFamily, FontStyle, RGBColor, ShapeStyle};
use statsintro_core::{Error, Result};
use tracing::debug;

use crate::color::Color;
use crate::figure::{Axes, Figure, Series, SeriesKind, Side};
use crate::style::{points_to_pixels, FontWeight, Style, TickDirection, TickStyle};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Spine width in points
const SPINE_WIDTH: f64 = 0.8;

/// Legend sample length in pixels
const LEGEND_SAMPLE: i32 = 24;

fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Pixel size of a figure of `size` inches at `dpi`
pub fn pixel_size(size: (f64, f64), dpi: u32) -> Result<(u32, u32)> {
    let width = (size.0 * f64::from(dpi)).round();
    let height = (size.1 * f64::from(dpi)).round();
    let valid = |v: f64| v >= 1.0 && v <= f64::from(u32::MAX);
    if !(valid(width) && valid(height)) {
        return Err(Error::InvalidParameter(format!(
            "figure size {}x{} in at {dpi} dpi has no pixels",
            size.0, size.1
        )));
    }
    Ok((width as u32, height as u32))
}

/// Render `figure` as a PNG file, overwriting `path`
pub fn render_png(figure: &Figure, path: &Path, dpi: u32, size: (f64, f64)) -> Result<()> {
    let pixels = pixel_size(size, dpi)?;
    debug!(path = %path.display(), width = pixels.0, height = pixels.1, "rendering figure");

    let root = BitMapBackend::new(path, pixels).into_drawing_area();
    draw_figure(figure, dpi, &root)?;
    root.present().map_err(render_error)?;
    Ok(())
}

/// Draw every axes of `figure` onto `root`
pub fn draw_figure<DB: DrawingBackend>(
    figure: &Figure,
    dpi: u32,
    root: &DrawingArea<DB, Shift>,
) -> Result<()> {
    root.fill(&plotters::style::WHITE).map_err(render_error)?;
    let panels = root.split_evenly(figure.shape());
    for (index, (axes, panel)) in figure.axes().iter().zip(&panels).enumerate() {
        debug!(index, series = axes.series().len(), "drawing axes");
        draw_axes(axes, figure.style(), dpi, panel)?;
    }
    Ok(())
}

/// Fonts of one figure, sized in pixels
struct Fonts {
    family: &'static str,
    style: FontStyle,
    dpi: u32,
}

impl Fonts {
    fn new(style: &Style, dpi: u32) -> Self {
        let weight = match style.font_weight {
            FontWeight::Normal => FontStyle::Normal,
            FontWeight::Bold => FontStyle::Bold,
        };
        Self {
            family: style.font_family.as_str(),
            style: weight,
            dpi,
        }
    }

    fn pixels(&self, points: f64) -> f64 {
        // non-positive or NaN sizes still need a drawable glyph height
        points_to_pixels(points, self.dpi).max(1.0)
    }

    fn desc(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(BackendFamily::from(self.family), self.pixels(points), self.style)
    }
}

/// Label area and margin sizes of one chart, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    margin: u32,
    x_area: u32,
    y_area: u32,
}

fn tick_length(tick: &TickStyle, dpi: u32) -> i32 {
    let len = points_to_pixels(tick.major_size, dpi).max(0.0).round() as i32;
    match tick.direction {
        TickDirection::Out => len,
        TickDirection::In => -len,
    }
}

fn layout(axes: &Axes, style: &Style, fonts: &Fonts) -> Layout {
    if !style.autolayout {
        return Layout {
            margin: 10,
            x_area: 40,
            y_area: 60,
        };
    }
    let outward = |tick: &TickStyle| tick_length(tick, fonts.dpi).max(0) as f64;
    let desc = |label: &str| {
        if label.is_empty() {
            0.0
        } else {
            fonts.pixels(style.axes_label_size) * 1.4
        }
    };
    let x_tick_text = fonts.pixels(style.xtick.label_size) * 1.6;
    // room for about five digits of tick label
    let y_tick_text = fonts.pixels(style.ytick.label_size) * 3.2;
    Layout {
        margin: (fonts.pixels(style.font_size) * 0.8).round() as u32,
        x_area: (outward(&style.xtick) + x_tick_text + desc(&axes.x_label)).round() as u32,
        y_area: (outward(&style.ytick) + y_tick_text + desc(&axes.y_label)).round() as u32,
    }
}

/// Range handed to the chart: degenerate or inverted limits are widened
pub fn drawable_range((lo, hi): (f64, f64)) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) {
        return (0.0, 1.0);
    }
    if lo == hi {
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
        return (lo - pad, hi + pad);
    }
    if lo > hi {
        (hi, lo)
    } else {
        (lo, hi)
    }
}

fn label_position(side: Side) -> LabelAreaPosition {
    match side {
        Side::Left => LabelAreaPosition::Left,
        Side::Right => LabelAreaPosition::Right,
        Side::Top => LabelAreaPosition::Top,
        Side::Bottom => LabelAreaPosition::Bottom,
    }
}

fn shape(color: Color, width_points: f64, dpi: u32) -> ShapeStyle {
    let px = points_to_pixels(width_points, dpi).round().max(1.0) as u32;
    RGBColor::from(color).stroke_width(px)
}

fn draw_axes<DB: DrawingBackend>(
    axes: &Axes,
    style: &Style,
    dpi: u32,
    area: &DrawingArea<DB, Shift>,
) -> Result<()> {
    let fonts = Fonts::new(style, dpi);
    let layout = layout(axes, style, &fonts);
    let (x0, x1) = drawable_range(axes.x_limits());
    let (y0, y1) = drawable_range(axes.y_limits());
    let x_side = axes.x_tick_side();
    let y_side = axes.y_tick_side();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(layout.margin)
        .set_label_area_size(label_position(x_side), layout.x_area)
        .set_label_area_size(label_position(y_side), layout.y_area);
    if !axes.title.is_empty() {
        builder.caption(&axes.title, fonts.desc(style.title_size));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_error)?;

    let spine = shape(Color::BLACK, SPINE_WIDTH, dpi);
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .axis_style(spine)
            .x_label_style(fonts.desc(style.xtick.label_size))
            .y_label_style(fonts.desc(style.ytick.label_size))
            .axis_desc_style(fonts.desc(style.axes_label_size))
            .set_tick_mark_size(label_position(x_side), tick_length(&style.xtick, dpi))
            .set_tick_mark_size(label_position(y_side), tick_length(&style.ytick, dpi));
        if !axes.x_label.is_empty() {
            mesh.x_desc(axes.x_label.clone());
        }
        if !axes.y_label.is_empty() {
            mesh.y_desc(axes.y_label.clone());
        }
        mesh.draw().map_err(render_error)?;
    }

    // the tick sides get their axis line from the mesh
    let spines = axes.spines();
    let borders = [
        (Side::Left, [(x0, y0), (x0, y1)]),
        (Side::Right, [(x1, y0), (x1, y1)]),
        (Side::Top, [(x0, y1), (x1, y1)]),
        (Side::Bottom, [(x0, y0), (x1, y0)]),
    ];
    for (side, ends) in borders {
        if spines.is_visible(side) && side != x_side && side != y_side {
            chart
                .draw_series(std::iter::once(PathElement::new(ends.to_vec(), spine)))
                .map_err(render_error)?;
        }
    }

    for series in axes.series() {
        draw_series(&mut chart, series, style, &fonts)?;
    }

    if axes.has_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(fonts.desc(style.legend_font_size))
            .background_style(plotters::style::WHITE.mix(0.8))
            .border_style(plotters::style::BLACK)
            .draw()
            .map_err(render_error)?;
    }
    Ok(())
}

/// Runs of consecutive finite points; non-finite points break a line
fn finite_runs(x: &[f64], y: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (&xi, &yi) in x.iter().zip(y) {
        if xi.is_finite() && yi.is_finite() {
            current.push((xi, yi));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn draw_path<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    points: Vec<(f64, f64)>,
    series: &Series,
    dpi: u32,
) -> Result<()> {
    let stroke = shape(series.color, series.width, dpi);
    let drawn = match series.line_style.pattern() {
        None => chart
            .draw_series(std::iter::once(PathElement::new(points, stroke)))
            .map(|_| ()),
        Some((dash, gap)) => {
            let width = points_to_pixels(series.width, dpi).max(1.0);
            let dash = (dash * width).round().max(1.0) as u32;
            let gap = (gap * width).round().max(1.0) as u32;
            chart
                .draw_series(DashedLineSeries::new(points, dash, gap, stroke))
                .map(|_| ())
        }
    };
    drawn.map_err(render_error)
}

fn draw_series<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    series: &Series,
    style: &Style,
    fonts: &Fonts,
) -> Result<()> {
    let dpi = fonts.dpi;
    let color = RGBColor::from(series.color);
    match &series.kind {
        SeriesKind::Line { x, y } => {
            for run in finite_runs(x, y) {
                draw_path(chart, run, series, dpi)?;
            }
        }
        SeriesKind::HLine { y, xmin, xmax } => {
            draw_path(chart, vec![(*xmin, *y), (*xmax, *y)], series, dpi)?;
        }
        SeriesKind::VLine { x, ymin, ymax } => {
            draw_path(chart, vec![(*x, *ymin), (*x, *ymax)], series, dpi)?;
        }
        SeriesKind::Scatter { x, y, size } => {
            let radius = points_to_pixels(size / 2.0, dpi).round().max(1.0) as u32;
            let points = finite_runs(x, y).into_iter().flatten();
            chart
                .draw_series(points.map(|p| Circle::new(p, radius, color.filled())))
                .map_err(render_error)?;
        }
        SeriesKind::Bars {
            left,
            width,
            height,
        } => {
            let bars = left
                .iter()
                .zip(width)
                .zip(height)
                .filter(|((l, w), h)| l.is_finite() && w.is_finite() && h.is_finite())
                .map(|((&l, &w), &h)| Rectangle::new([(l, 0.0), (l + w, h)], color.filled()));
            chart.draw_series(bars).map_err(render_error)?;
        }
        SeriesKind::ErrorBar { x, y, err } => {
            let cap = points_to_pixels(4.0, dpi).round() as u32;
            let stroke = shape(series.color, series.width, dpi);
            let bars = x
                .iter()
                .zip(y)
                .zip(err)
                .filter(|((a, b), e)| a.is_finite() && b.is_finite() && e.is_finite())
                .map(|((&xi, &yi), &e)| {
                    ErrorBar::new_vertical(xi, yi - e.abs(), yi, yi + e.abs(), stroke, cap)
                });
            chart.draw_series(bars).map_err(render_error)?;
        }
        SeriesKind::Text { x, y, text, size } => {
            let points = size.unwrap_or(style.axes_label_size);
            let font = fonts.desc(points).color(&color);
            chart
                .draw_series(std::iter::once(Text::new(text.clone(), (*x, *y), font)))
                .map_err(render_error)?;
        }
    }

    if let Some(label) = &series.label {
        draw_legend_entry(chart, series, label, dpi)?;
    }
    Ok(())
}

/// Register a legend entry through an empty series
fn draw_legend_entry<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    series: &Series,
    label: &str,
    dpi: u32,
) -> Result<()> {
    let color = RGBColor::from(series.color);
    let stroke = shape(series.color, series.width, dpi);
    let anno = chart
        .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())
        .map_err(render_error)?;
    anno.label(label);
    match series.kind {
        SeriesKind::Scatter { .. } | SeriesKind::ErrorBar { .. } => {
            anno.legend(move |(x, y)| Circle::new((x + LEGEND_SAMPLE / 2, y), 4, color.filled()));
        }
        SeriesKind::Bars { .. } => {
            anno.legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + LEGEND_SAMPLE, y + 5)], color.filled())
            });
        }
        _ => {
            anno.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SAMPLE, y)], stroke));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::configure;

    #[test]
    fn test_pixel_size() {
        assert_eq!(pixel_size((8.0, 6.0), 200).unwrap(), (1600, 1200));
        assert_eq!(pixel_size((4.0, 3.0), 100).unwrap(), (400, 300));
        assert!(pixel_size((0.0, 6.0), 200).is_err());
        assert!(pixel_size((8.0, f64::NAN), 200).is_err());
    }

    #[test]
    fn test_drawable_range() {
        assert_eq!(drawable_range((1.0, 2.0)), (1.0, 2.0));
        assert_eq!(drawable_range((0.0, 0.0)), (-0.5, 0.5));
        assert_eq!(drawable_range((2.0, 1.0)), (1.0, 2.0));
        assert_eq!(drawable_range((f64::NAN, 1.0)), (0.0, 1.0));
        let (lo, hi) = drawable_range((10.0, 10.0));
        assert!(lo < 10.0 && hi > 10.0);
    }

    #[test]
    fn test_tick_length_direction() {
        let style = configure(18.0);
        assert_eq!(tick_length(&style.xtick, 72), 6);
        assert_eq!(tick_length(&style.xtick, 144), 12);
        let inward = TickStyle {
            direction: TickDirection::In,
            ..style.xtick
        };
        assert_eq!(tick_length(&inward, 72), -6);
    }

    #[test]
    fn test_layout_scales_with_fonts() {
        let axes = Axes::new();
        let small = configure(10.0);
        let large = configure(30.0);
        let a = layout(&axes, &small, &Fonts::new(&small, 100));
        let b = layout(&axes, &large, &Fonts::new(&large, 100));
        assert!(b.x_area > a.x_area);
        assert!(b.y_area > a.y_area);
        assert!(b.margin > a.margin);

        let fixed = small.with_autolayout(false);
        let c = layout(&axes, &fixed, &Fonts::new(&fixed, 100));
        assert_eq!(c, Layout { margin: 10, x_area: 40, y_area: 60 });
    }

    #[test]
    fn test_finite_runs_split_on_nan() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, f64::NAN, 3.0, 4.0];
        let runs = finite_runs(&x, &y);
        assert_eq!(runs, vec![vec![(0.0, 0.0), (1.0, 1.0)], vec![(3.0, 3.0), (4.0, 4.0)]]);
        assert!(finite_runs(&[f64::NAN], &[1.0]).is_empty());
    }

    #[test]
    fn test_render_png_writes_file() {
        let dir = std::env::temp_dir().join(format!("statsintro-render-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("render.png");

        let mut fig = Figure::new(&configure(12.0));
        let ax = fig.gca();
        ax.line(&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0]).label("v");
        ax.hlines(0.5, 0.0, 2.0)
            .line_style(crate::figure::LineStyle::Dashed);
        ax.text(1.0, 0.5, "note");
        ax.set_title("t").set_xlabel("x").set_ylabel("y").legend();

        render_png(&fig, &path, 50, (4.0, 3.0)).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        std::fs::remove_dir_all(&dir).ok();
    }
}
