//! Error types for the data-loader crate.
//!
//! Two layers of errors live here:
//! - [`RecordError`] describes why a single raw line could not become a movie.
//!   It knows nothing about files or line numbers.
//! - [`DataLoadError`] is what loading a whole dataset can fail with. A line
//!   failure is wrapped together with the line number it came from.

use thiserror::Error;

/// Why one raw dataset line could not be turned into a [`Movie`](crate::Movie).
///
/// A bad year is deliberately absent: an unparsable year only leaves the
/// movie's year unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The leading id field is not an integer
    #[error("malformed movie identifier: {value:?}")]
    MalformedIdentifier { value: String },

    /// The line holds a single `"` so the quoted title never closes
    #[error("quoted title is never closed")]
    UnbalancedQuote,
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A line in the dataset couldn't be parsed
    ///
    /// `line` is the 1-based physical line number, header included.
    #[error("Parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_line_and_cause() {
        let err = DataLoadError::Parse {
            line: 7,
            source: RecordError::MalformedIdentifier {
                value: "abc".to_string(),
            },
        };

        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("\"abc\""));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: DataLoadError = io.into();
        assert!(matches!(err, DataLoadError::IoError(_)));
    }
}
