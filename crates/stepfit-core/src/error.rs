//! Error types for time series segmentation and approximation
//!
//! Provides a unified error type for all stepfit crates.

use thiserror::Error;

/// Core error type for segmentation and approximation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration value (zero window size, zero budget, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An operation received an empty input series or slice list
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Two sequences that must align index-for-index have different lengths
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Tolerance escalation exceeded its safety bound before the cluster
    /// count fit the budget
    #[error(
        "Clustering did not converge: {clusters} clusters still exceed budget {budget} \
         after {rounds} escalation rounds"
    )]
    DidNotConverge {
        rounds: usize,
        clusters: usize,
        budget: usize,
    },

    /// The baseline error measure is exactly zero, so relative improvement
    /// over it is undefined
    #[error("Degenerate baseline: baseline error is zero, relative improvement is undefined")]
    DegenerateBaseline,

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(context.to_string())
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("window_size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: window_size must be positive"
        );

        let err = Error::EmptyInput("series".to_string());
        assert_eq!(err.to_string(), "Empty input: series");

        let err = Error::SizeMismatch {
            expected: 10,
            actual: 7,
            context: "rmse".to_string(),
        };
        assert_eq!(err.to_string(), "Size mismatch in rmse: expected 10, got 7");

        let err = Error::DidNotConverge {
            rounds: 100,
            clusters: 12,
            budget: 4,
        };
        assert_eq!(
            err.to_string(),
            "Clustering did not converge: 12 clusters still exceed budget 4 after 100 escalation rounds"
        );

        let err = Error::DegenerateBaseline;
        assert!(err.to_string().contains("relative improvement is undefined"));
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_config("epsilon_step must be positive");
        match err {
            Error::InvalidConfig(msg) => assert_eq!(msg, "epsilon_step must be positive"),
            _ => panic!("Wrong error type"),
        }

        let err = Error::empty_input("slice list");
        match err {
            Error::EmptyInput(ctx) => assert_eq!(ctx, "slice list"),
            _ => panic!("Wrong error type"),
        }

        let err = Error::size_mismatch(5, 3, "gmrae");
        match err {
            Error::SizeMismatch {
                expected,
                actual,
                context,
            } => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 3);
                assert_eq!(context, "gmrae");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::DegenerateBaseline)
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
