//! Error types for ActiveRow.
//!
//! These are internal signals: the mapping engine keeps "not found" and
//! "operation failed" distinguishable through `Result`, then flattens both to
//! the documented soft-fail shapes (empty vec, `None`, `false`) at its public
//! boundary. Only executor faults ever reach this type.

use std::fmt;

/// Errors raised below the mapping engine's public boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The executor failed to perform a storage operation.
    Execution(String),
    /// A stored cell could not be decoded into its declared kind.
    Decode {
        /// Column whose cell failed to decode.
        column: String,
        /// What was wrong with the stored form.
        detail: String,
    },
    /// An operation that requires an identifier was invoked on an unsaved record.
    MissingId,
    /// The executor does not support the requested raw statement.
    Unsupported(String),
}

impl Error {
    /// Attach a column name to a `Decode` error; other variants pass through.
    ///
    /// The codec cannot know which column a cell belongs to, so the engine
    /// fills it in at the decode site.
    #[must_use]
    pub fn for_column(self, column: &str) -> Self {
        match self {
            Error::Decode { detail, .. } => Error::Decode {
                column: column.to_string(),
                detail,
            },
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Execution(msg) => write!(f, "execution failed: {msg}"),
            Error::Decode { column, detail } => {
                write!(f, "cannot decode column `{column}`: {detail}")
            }
            Error::MissingId => write!(f, "record has no identifier"),
            Error::Unsupported(stmt) => write!(f, "unsupported statement: {stmt}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Decode {
            column: "age".to_string(),
            detail: "expected integer".to_string(),
        };
        assert_eq!(err.to_string(), "cannot decode column `age`: expected integer");
        assert_eq!(Error::MissingId.to_string(), "record has no identifier");
    }
}
