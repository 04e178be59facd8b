use crate::{users, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use usuario_core::{error::Result, storage::RecordStore, types::*};

/// Record store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` and apply migrations
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn exists(&self, id: UserId) -> Result<bool> {
        users::exists(&self.pool, id).await
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord> {
        users::insert(&self.pool, &record).await
    }

    async fn find(&self, id: UserId) -> Result<Option<UserRecord>> {
        users::get_by_id(&self.pool, id).await
    }
}
