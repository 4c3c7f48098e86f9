//! Error types for gridsource.

use alloc::string::String;
use core::fmt;

/// Result type alias for gridsource operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for adapter operations.
///
/// Reads never produce errors; absence is reported through sentinel values.
/// Only writes that address a row or column that does not exist fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row position is out of range or the slot is blank.
    RowNotFound {
        row: usize,
    },
    /// Column reference could not be resolved against the schema.
    ColumnNotFound {
        column: String,
    },
    /// Invalid schema definition or configuration.
    InvalidSchema {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RowNotFound { row } => write!(f, "Row not found: {}", row),
            Error::ColumnNotFound { column } => write!(f, "Column not found: {}", column),
            Error::InvalidSchema { message } => write!(f, "Invalid schema: {}", message),
        }
    }
}

impl Error {
    /// Creates a row not found error.
    pub fn row_not_found(row: usize) -> Self {
        Error::RowNotFound { row }
    }

    /// Creates a column not found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }
}
