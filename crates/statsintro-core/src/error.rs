//! Error types for the statsintro demos
//!
//! Provides a unified error type for all statsintro crates.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for demo computations and figure output
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// A reference distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(#[from] statrs::StatsError),

    /// The output directory of a figure does not exist or is not a directory
    #[error("Output directory {} does not exist or is not a directory", path.display())]
    OutputDir { path: PathBuf },

    /// The plotting backend failed to draw or encode a figure
    #[error("Render error: {0}")]
    Render(String),

    /// The figure viewer could not be launched
    #[error("Display error: {0}")]
    Display(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(name: &str, p: f64) -> Self {
        Self::InvalidParameter(format!("{name} = {p} must be in (0, 1)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InsufficientData { expected: 3, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 3 samples, got 1"
        );

        let err = Error::OutputDir {
            path: PathBuf::from("../Images"),
        };
        assert_eq!(
            err.to_string(),
            "Output directory ../Images does not exist or is not a directory"
        );

        let err = Error::Render("png encoder failed".to_string());
        assert_eq!(err.to_string(), "Render error: png encoder failed");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_probability("power", 1.5);
        assert_eq!(err.to_string(), "Invalid parameter: power = 1.5 must be in (0, 1)");

        let err = Error::size_mismatch(24, 23, "line fit");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in line fit: expected 24, got 23"
        );

        let err = Error::non_finite("x values");
        assert_eq!(
            err.to_string(),
            "Computation error: x values contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("read-only file system")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_statrs() {
        let err: Error = statrs::distribution::Normal::new(0.0, -1.0)
            .map_err(Error::from)
            .unwrap_err();
        assert!(matches!(err, Error::Distribution(_)));
        assert!(err.to_string().starts_with("Distribution error"));
    }
}
