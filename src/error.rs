//! Error handling for motifscan.
//!
//! All fallible operations in the crate return [`Result`], backed by the
//! [`MotifError`] enum. Configuration problems are rejected before any
//! generation or counting begins; an empty frequency table is reported,
//! never raised as an error.

use thiserror::Error;

/// Error type covering every motifscan operation.
#[derive(Error, Debug)]
pub enum MotifError {
    /// I/O errors from the corpus reader/writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid session configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid symbol encountered while reading a corpus
    #[error("Corpus parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The entropy rejection loop exhausted its attempt budget
    #[error("Entropy threshold {threshold} unreachable after {attempts} attempts")]
    ThresholdUnreachable { threshold: f64, attempts: usize },

    /// Report serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MotifError {
    /// Create a Config error from any message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a Parse error with the 1-based corpus line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for motifscan operations
pub type Result<T> = std::result::Result<T, MotifError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = MotifError::config("minimum size must be below maximum size");
        assert_eq!(
            err.to_string(),
            "Configuration error: minimum size must be below maximum size"
        );

        let err = MotifError::parse(7, "invalid symbol 'X'");
        assert_eq!(err.to_string(), "Corpus parse error at line 7: invalid symbol 'X'");

        let err = MotifError::ThresholdUnreachable {
            threshold: 2.1,
            attempts: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Entropy threshold 2.1 unreachable after 1000 attempts"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "corpus not found");
        let err: MotifError = io_err.into();
        match err {
            MotifError::Io(_) => (),
            _ => panic!("expected Io error"),
        }
    }
}
