//! Figures for the statsintro demos
//!
//! This crate holds the explicit figure model and everything needed to turn
//! it into an image file:
//!
//! - [`style`]: the default figure style, derived from one base font size
//! - [`figure`]: [`Figure`] and [`Axes`], plain values with no global state
//! - [`render`]: drawing with plotters onto a PNG bitmap
//! - [`output`]: the save-then-display helpers [`printout`] and [`printout_plain`]
//! - [`viewer`]: what "display" means (nothing, or the system image viewer)
//!
//! # Example
//!
//! ```rust
//! use statsintro_plot::{style, Figure, Side};
//!
//! let mut fig = Figure::new(&style::configure(18.0));
//! let ax = fig.gca();
//! ax.line(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]);
//! ax.despine(Side::Right);
//! assert!(!ax.spines().right);
//! ```

pub mod color;
pub mod figure;
pub mod output;
pub mod render;
pub mod style;
pub mod viewer;

pub use color::Color;
pub use figure::{Axes, Figure, LineStyle, Series, SeriesKind, Side};
pub use output::{printout, printout_plain, Labels, OutputConfig};
pub use style::{configure, Style};
pub use viewer::{DisplayMode, Headless, SystemViewer, Viewer};
