//! Error types for ddlforge.

use thiserror::Error;

use crate::expression::column::ColumnType;

#[derive(Debug, Error)]
pub enum Error {
    /// The dialect cannot express the requested feature and the generator
    /// runs in strict compatibility mode.
    #[error("operation not supported: {0}")]
    Unsupported(String),

    /// The expression is missing a required field or is internally
    /// inconsistent. Raised at rendering time, never deferred.
    #[error("malformed expression: {0}")]
    Malformed(String),

    /// Foreign key column lists on the two sides have different lengths.
    #[error(
        "foreign key column count mismatch: {foreign} foreign column(s) vs {primary} primary column(s)"
    )]
    ForeignKeyColumnCountMismatch { foreign: usize, primary: usize },

    /// The dialect's type map has no entry for the requested abstract type.
    #[error("no type mapping registered for {column_type} (requested size: {size:?})")]
    UnmappedType {
        column_type: ColumnType,
        size: Option<u32>,
    },

    /// The dialect identifier matches no registered dialect or alias.
    #[error("unknown dialect: '{0}'")]
    UnknownDialect(String),
}

impl Error {
    /// Create an unsupported-feature error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Create a malformed-expression error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Result type alias for ddlforge operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ForeignKeyColumnCountMismatch {
            foreign: 2,
            primary: 1,
        };
        assert_eq!(
            err.to_string(),
            "foreign key column count mismatch: 2 foreign column(s) vs 1 primary column(s)"
        );
    }

    #[test]
    fn test_unmapped_type_display() {
        let err = Error::UnmappedType {
            column_type: ColumnType::Xml,
            size: Some(100),
        };
        assert_eq!(
            err.to_string(),
            "no type mapping registered for Xml (requested size: Some(100))"
        );
    }
}
