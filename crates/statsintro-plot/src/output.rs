//! Saving and displaying finished figures
//!
//! [`printout`] labels the current axes, adds a dashed reference line at
//! `y = 0` without changing the x view limits, saves the figure as a PNG
//! and hands the file to a viewer. [`printout_plain`] only saves and
//! displays, for figures whose panels are already labelled.
//!
//! The figure is taken by value and released once the call returns,
//! whether it succeeded or not.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use statsintro_core::{Error, Result};
use tracing::debug;

use crate::color::Color;
use crate::figure::{Axes, Figure, LineStyle, DEFAULT_FIGURE_SIZE};
use crate::render::render_png;
use crate::viewer::{DisplayMode, Viewer};

/// Default directory figures are written to
pub const DEFAULT_OUT_DIR: &str = "../Images";

/// Default output resolution
pub const DEFAULT_DPI: u32 = 200;

/// Environment variable overriding the output directory
pub const OUT_DIR_ENV: &str = "STATSINTRO_OUT_DIR";

/// Environment variable selecting the [`DisplayMode`]
pub const DISPLAY_ENV: &str = "STATSINTRO_DISPLAY";

/// Where and how figures are written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    pub dpi: u32,
    /// Size in inches of figures that do not set their own
    pub figure_size: (f64, f64),
    pub display: DisplayMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            dpi: DEFAULT_DPI,
            figure_size: DEFAULT_FIGURE_SIZE,
            display: DisplayMode::None,
        }
    }
}

impl OutputConfig {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Defaults overridden by `STATSINTRO_OUT_DIR` and `STATSINTRO_DISPLAY`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by the values `lookup` returns for the
    /// environment variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(OUT_DIR_ENV).filter(|d| !d.is_empty()) {
            config.out_dir = PathBuf::from(dir);
        }
        if let Some(mode) = lookup(DISPLAY_ENV) {
            config.display = mode.parse()?;
        }
        Ok(config)
    }

    /// Path a figure called `file_name` is saved to
    ///
    /// The file name is used as given.
    pub fn target(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

/// Axis labels and title applied by [`printout`]
///
/// An empty string clears the corresponding text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub x: String,
    pub y: String,
    pub title: String,
}

impl Labels {
    pub fn new(x: impl Into<String>, y: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            title: title.into(),
        }
    }
}

/// Draw the dashed grey line at `y = 0` across the current x view
///
/// The x limits are pinned to the values they had before, so the line
/// never widens the view.
pub fn add_baseline(axes: &mut Axes) {
    let (xmin, xmax) = axes.x_limits();
    axes.hlines(0.0, xmin, xmax)
        .color(Color::BASELINE)
        .line_style(LineStyle::Dashed);
    axes.set_xlim(xmin, xmax);
}

/// Set labels and title and add the baseline
pub fn decorate(axes: &mut Axes, labels: &Labels) {
    axes.set_xlabel(labels.x.as_str())
        .set_ylabel(labels.y.as_str())
        .set_title(labels.title.as_str());
    add_baseline(axes);
}

/// Render `figure` to `output.target(file_name)`
///
/// Fails with [`Error::OutputDir`] before drawing anything when the output
/// directory is missing.
pub fn save(figure: &Figure, file_name: &str, output: &OutputConfig) -> Result<PathBuf> {
    if !output.out_dir.is_dir() {
        return Err(Error::OutputDir {
            path: output.out_dir.clone(),
        });
    }
    let path = output.target(file_name);
    let size = figure.size().unwrap_or(output.figure_size);
    render_png(figure, &path, output.dpi, size)?;
    debug!(path = %path.display(), "figure saved");
    Ok(path)
}

/// Write the two status lines announcing a saved figure
pub fn write_status(out: &mut dyn Write, out_dir: &Path, file_name: &str) -> Result<()> {
    writeln!(out, "OutDir: {}", out_dir.display())?;
    writeln!(out, "Figure saved to {file_name}")?;
    out.flush()?;
    Ok(())
}

fn save_and_show(
    figure: Figure,
    file_name: &str,
    output: &OutputConfig,
    viewer: &dyn Viewer,
    out: &mut dyn Write,
) -> Result<()> {
    let path = save(&figure, file_name, output)?;
    write_status(out, &output.out_dir, file_name)?;
    let shown = viewer.show(&path);
    drop(figure);
    debug!(file_name, "figure released");
    shown
}

/// Label the current axes, add the baseline, save and display the figure
///
/// ```no_run
/// use statsintro_plot::output::{printout, Labels, OutputConfig};
/// use statsintro_plot::{style, Figure};
///
/// let mut fig = Figure::new(&style::configure(18.0));
/// fig.gca().scatter(&[1.0, 2.0, 3.0], &[2.0, 1.0, 3.0]);
/// printout(fig, "scatterPlot.png", &Labels::new("x", "y", "Scatter"), &OutputConfig::default())?;
/// # Ok::<(), statsintro_core::Error>(())
/// ```
pub fn printout(
    figure: Figure,
    file_name: &str,
    labels: &Labels,
    output: &OutputConfig,
) -> Result<()> {
    let viewer = output.display.viewer();
    printout_with(figure, file_name, labels, output, viewer.as_ref())
}

/// [`printout`] with an explicit viewer
pub fn printout_with(
    figure: Figure,
    file_name: &str,
    labels: &Labels,
    output: &OutputConfig,
    viewer: &dyn Viewer,
) -> Result<()> {
    printout_to(figure, file_name, labels, output, viewer, &mut io::stdout())
}

/// [`printout_with`], writing the status lines to `out` instead of stdout
pub fn printout_to(
    mut figure: Figure,
    file_name: &str,
    labels: &Labels,
    output: &OutputConfig,
    viewer: &dyn Viewer,
    out: &mut dyn Write,
) -> Result<()> {
    decorate(figure.gca(), labels);
    save_and_show(figure, file_name, output, viewer, out)
}

/// Save and display the figure as it is
pub fn printout_plain(figure: Figure, file_name: &str, output: &OutputConfig) -> Result<()> {
    let viewer = output.display.viewer();
    printout_plain_with(figure, file_name, output, viewer.as_ref())
}

/// [`printout_plain`] with an explicit viewer
pub fn printout_plain_with(
    figure: Figure,
    file_name: &str,
    output: &OutputConfig,
    viewer: &dyn Viewer,
) -> Result<()> {
    printout_plain_to(figure, file_name, output, viewer, &mut io::stdout())
}

/// [`printout_plain_with`], writing the status lines to `out`
pub fn printout_plain_to(
    figure: Figure,
    file_name: &str,
    output: &OutputConfig,
    viewer: &dyn Viewer,
    out: &mut dyn Write,
) -> Result<()> {
    save_and_show(figure, file_name, output, viewer, out)
}
