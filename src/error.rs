//! Error types for resume-outline.
//!
//! Segmentation itself is total and never fails; these errors only come from
//! loading line streams and rendering results.

use std::io;
use thiserror::Error;

/// Result type alias for resume-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The line stream is not valid JSON or does not match the line record shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line record carries values the segmenter cannot work with.
    #[error("Invalid line: {0}")]
    InvalidLine(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidLine("line 3: font size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid line: line 3: font size must be positive"
        );

        let err = Error::Other("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
