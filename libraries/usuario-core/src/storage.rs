//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewUserRecord, UserId, UserRecord};
use async_trait::async_trait;

/// Record store holding user records for the lifetime of the process
///
/// Implementations serialize access to their underlying storage and
/// enforce uniqueness of `UserRecord::id`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether a record with this identifier exists
    async fn exists(&self, id: UserId) -> Result<bool>;

    /// Insert a new record
    ///
    /// The existence check and the write are a single atomic step:
    /// returns `UsuarioError::DuplicateKey` if the identifier is taken at
    /// the time of the write, even when a preceding `exists` said otherwise.
    /// Missing fields are written as `NULL`; a constraint violation is a
    /// `UsuarioError::Database` carrying the store's message.
    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord>;

    /// Look up a record by identifier
    async fn find(&self, id: UserId) -> Result<Option<UserRecord>>;
}
