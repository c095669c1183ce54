//! Error types for argot.

use thiserror::Error;

/// Main error type for argot operations.
///
/// The binding core itself is total and never produces one of these; errors
/// only arise at the edges, when loading catalogs or resolving commands.
#[derive(Error, Debug)]
pub enum ArgotError {
    /// A command referenced an action the catalog does not contain
    #[error("Action not found: {0}")]
    ActionNotFound(String),

    /// A command line contained no action reference
    #[error("Empty command")]
    EmptyCommand,

    /// Error reading an action definition or catalog directory
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for argot operations
pub type Result<T> = std::result::Result<T, ArgotError>;

impl From<serde_json::Error> for ArgotError {
    fn from(err: serde_json::Error) -> Self {
        ArgotError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ArgotError {
    fn from(err: std::io::Error) -> Self {
        ArgotError::CatalogError(format!("IO error: {}", err))
    }
}
