//! Error types for table construction and operations.

/// Error type for table operations.
///
/// Every variant is a programming or data-contract error: the caller passed a
/// dataset that does not match the declared schema, referenced a column that
/// was never declared, or dispatched an operation the table is not configured
/// for. None of these are transient; there is no retry policy. A failed
/// operation leaves the previous table state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A declared column is missing from a raw record.
    ///
    /// Raised during row materialization. The whole materialization call
    /// fails atomically; no partial row list is produced.
    #[error("Column '{column}' not found in record {row}")]
    SchemaMismatch { column: String, row: usize },

    /// A sort referenced a column name that is not part of the schema.
    #[error("Column '{name}' is not declared in the schema")]
    UnknownColumn { name: String },

    /// An operation was dispatched that this table is not configured to
    /// handle (e.g. page navigation with pagination disabled).
    #[error("Operation '{operation}' is not valid for this table")]
    InvalidOperation { operation: &'static str },
}

impl TableError {
    /// Creates a new schema mismatch error for a missing column.
    pub fn schema_mismatch(column: impl Into<String>, row: usize) -> Self {
        Self::SchemaMismatch {
            column: column.into(),
            row,
        }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }

    /// Creates a new invalid operation error.
    pub fn invalid_operation(operation: &'static str) -> Self {
        Self::InvalidOperation { operation }
    }
}
