//! Worked examples for an introductory statistics course
//!
//! Each module reproduces one worked example on a small published dataset
//! (see [`data`]) and returns typed results, so the regression harness can
//! compare them with recorded values:
//!
//! - [`anova`]: one-way ANOVA, with and without the explicit sum-of-squares
//!   decomposition
//! - [`one_sample`] and [`two_sample`]: t-tests and rank tests
//! - [`binomial`]: exact binomial test
//! - [`sample_size`]: sample sizes for a given effect, level and power
//! - [`fit_line`]: least squares line with confidence intervals
//! - [`kde`]: Gaussian kernel density estimation
//!
//! The [`figures`] module holds the demos that only draw.
//!
//! # Example
//!
//! ```rust
//! use statsintro_demos::anova;
//!
//! let result = anova::anova_oneway().unwrap();
//! assert!(result.is_significant(0.05));
//! ```

pub mod anova;
pub mod binomial;
pub mod data;
pub mod figures;
pub mod fit_line;
pub mod kde;
pub mod one_sample;
pub mod sample_size;
pub mod two_sample;
pub mod types;

pub use types::{ConfidenceInterval, TestResult};
