//! Error types for schema loading.
//!
//! Parsing itself never fails: lines that cannot be understood are reported
//! as [`Diagnostic`](crate::parser::Diagnostic)s. The only fatal condition is
//! a schema file that cannot be read.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema loading.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Fatal schema loading error.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("Failed to read schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Create a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
