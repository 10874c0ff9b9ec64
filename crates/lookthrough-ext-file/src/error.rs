//! Error types for table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading input tables.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A file could not be opened, read, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be parsed.
    #[error("Failed to parse {origin}: {source}")]
    Parse {
        /// File path or label of the text being parsed.
        origin: String,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// The delimiter is not a single-byte ASCII character.
    #[error("Invalid delimiter {0:?}: must be a single ASCII character")]
    InvalidDelimiter(char),
}

impl LoadError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a file or label.
    #[must_use]
    pub fn parse(origin: impl Into<String>, source: csv::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::io(
            "data/prices.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("data/prices.csv"));
        assert!(err.to_string().contains("missing"));

        let err = LoadError::InvalidDelimiter('€');
        assert!(err.to_string().contains('€'));
    }
}
