//! Worked examples for an introductory statistics course
//!
//! This crate re-exports the workspace:
//!
//! - [`base`]: the shared error type and slice helpers
//! - [`plot`]: figure style, the figure model and the save-then-display helpers
//! - [`demos`]: the worked examples and figure demos
//! - [`harness`]: the regression harness that re-runs the demos
//!
//! # Example
//!
//! ```rust
//! use statsintro::prelude::*;
//!
//! let style = configure(18.0);
//! assert_eq!(style.xtick.label_size, 16.0);
//!
//! let mut fig = Figure::new(&style);
//! fig.gca().line(&[0.0, 1.0], &[1.0, 0.0]);
//! assert_eq!(fig.axes().len(), 1);
//! ```

pub use statsintro_core as base;
pub use statsintro_demos as demos;
pub use statsintro_harness as harness;
pub use statsintro_plot as plot;

/// Prelude for convenient imports
pub mod prelude {
    pub use statsintro_core::{Error, Result};
    pub use statsintro_demos::{ConfidenceInterval, TestResult};
    pub use statsintro_harness::{Case, CaseKind, ExpectedResult, Outcome, Report, Runner, Tolerance};
    pub use statsintro_plot::{
        configure, printout, printout_plain, Axes, DisplayMode, Figure, Labels, LineStyle,
        OutputConfig, Side, Style,
    };
}
