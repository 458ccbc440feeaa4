//! Table error definitions

use std::error::Error;
use std::fmt;

/// Table error types
#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    /// Table constructed with zero buckets
    ZeroCapacity,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroCapacity => {
                write!(f, "capacity must be positive: a zero-bucket table has no index space")
            }
        }
    }
}

impl Error for TableError {}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
