/// Core error types for the Usuario registry
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `UsuarioError`
pub type Result<T> = std::result::Result<T, UsuarioError>;

/// Core error type for the Usuario registry
#[derive(Error, Debug)]
pub enum UsuarioError {
    /// A record with this identifier already exists
    #[error("Duplicate key: {0}")]
    DuplicateKey(UserId),

    /// Storage-related errors
    #[error("{0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("{0}")]
    Database(String),
}

impl UsuarioError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error reports an already existing identifier
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for UsuarioError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
