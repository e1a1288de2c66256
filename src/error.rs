//! Custom error types for series-heatmap.
//!
//! The matrix, statistics, and highlight computations never fail; errors only
//! come from loading input files and from binge calculator validation.

use crate::binge::BingeError;
use std::error::Error;
use std::fmt;
use std::io;

/// Application error types.
#[derive(Debug)]
pub enum AppError {
    /// File I/O errors
    Io(io::Error),
    /// Series JSON parsing errors
    Parse(String),
    /// Configuration errors
    Config(String),
    /// The loaded document describes a movie, not a series
    NotASeries(String),
    /// Invalid input from the user
    InvalidInput(String),
    /// Binge calculator rejected the cadence
    Binge(BingeError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::NotASeries(title) => write!(
                f,
                "'{}' is a movie. Please select a TV series, not a movie.",
                title
            ),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Binge(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Binge(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<BingeError> for AppError {
    fn from(err: BingeError) -> Self {
        AppError::Binge(err)
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Parse("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Parse error: expected value at line 1");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.source().is_some());
    }

    #[test]
    fn test_error_not_a_series() {
        let err = AppError::NotASeries("Heat".to_string());
        assert!(err.to_string().contains("Please select a TV series, not a movie."));
    }

    #[test]
    fn test_error_from_binge() {
        let err: AppError = BingeError::InvalidCadence("hours per day cannot exceed 24").into();
        assert_eq!(err.to_string(), "hours per day cannot exceed 24");
    }
}
