//! Error types for the media library pipeline.
//!
//! Every failure is fatal: nothing in the pipeline retries or recovers.
//! The binary surfaces the message and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors produced while loading, rendering, or writing the library page
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Input catalog does not exist
    #[error("Media catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input catalog exists but could not be read
    #[error("Failed to read media catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input catalog is not valid JSON
    #[error("Failed to parse media catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Input catalog is JSON but its top level is not an object
    #[error("Media catalog {} must be a JSON object of records", path.display())]
    NotAnObject { path: PathBuf },

    /// Season or episode number cannot be zero-padded
    #[error("Cannot format {field} value {value} as a non-negative integer")]
    Format { field: &'static str, value: String },

    /// Output directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    Format,
    Write,
}

impl LibraryError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::NotFound { .. } => ErrorKind::NotFound,
            LibraryError::Read { .. } | LibraryError::Parse { .. } | LibraryError::NotAnObject { .. } => {
                ErrorKind::Parse
            }
            LibraryError::Format { .. } => ErrorKind::Format,
            LibraryError::Write { .. } => ErrorKind::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = LibraryError::NotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.json"));

        let err = LibraryError::Format {
            field: "season",
            value: "\"three\"".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("season"));

        let err = LibraryError::NotAnObject {
            path: PathBuf::from("list.json"),
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
