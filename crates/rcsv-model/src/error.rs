use thiserror::Error;

/// Errors raised by table operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// A selection referenced a column the table does not have.
    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
