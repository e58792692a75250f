//! Regression harness for the statsintro demos
//!
//! A [`Case`] pairs a demo with how it is judged: checked demos return
//! numbers compared with recorded [`ExpectedResult`]s, smoke demos only have
//! to finish. The [`Runner`] runs cases in order and isolates failures, so
//! one broken demo never hides the others.
//!
//! # Example
//!
//! ```rust
//! use statsintro_harness::{registry, Runner};
//! use statsintro_plot::OutputConfig;
//!
//! let cases = registry::cases(&OutputConfig::default());
//! let report = Runner::new().checked_only(true).run(&cases);
//! assert!(report.is_success(), "{report}");
//! ```

pub mod case;
pub mod expected;
pub mod registry;
pub mod runner;

pub use case::{Case, CaseKind};
pub use expected::{ExpectedResult, Mismatch, Tolerance};
pub use runner::{run_case, CaseReport, Outcome, Report, Runner};
