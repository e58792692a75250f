//! Shared foundation for the statsintro workspace
//!
//! Every other crate reports failures through [`Error`] and uses the
//! slice helpers in [`utils`] for means, variances and ranks.
//!
//! # Example
//!
//! ```rust
//! use statsintro_core::utils::{finite_pairs, mean};
//!
//! let x = [1.0, 2.0, f64::NAN];
//! let y = [2.0, 4.0, 6.0];
//! let (x, y) = finite_pairs(&x, &y).unwrap();
//! assert_eq!(mean(&x), 1.5);
//! assert_eq!(y, vec![2.0, 4.0]);
//! ```

pub mod error;
pub mod utils;

pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
