//! Record loading error types
//!
//! Every variant here is fatal at startup: the dashboard never serves a
//! partially loaded table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the record table
#[derive(Error, Debug)]
pub enum LoadError {
    /// Source file could not be opened or read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV framing error (bad quoting, unreadable record)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Date of Admission could not be parsed
    #[error("Line {line}: invalid admission date '{value}'")]
    InvalidDate { line: usize, value: String },

    /// Age is not a non-negative integer
    #[error("Line {line}: invalid age '{value}'")]
    InvalidAge { line: usize, value: String },
}

/// Result type alias for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn("Billing Amount");
        assert_eq!(err.to_string(), "Missing required column: Billing Amount");

        let err = LoadError::InvalidDate {
            line: 3,
            value: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: invalid admission date 'yesterday'");
    }
}
