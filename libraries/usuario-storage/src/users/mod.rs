//! User record queries

use sqlx::SqlitePool;
use usuario_core::{error::Result, types::*, UsuarioError};

/// Check whether a record with this identifier exists
pub async fn exists(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuario WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Get a record by identifier
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<UserRecord>> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, name, birth_date
         FROM usuario
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a record unless its identifier is already taken
///
/// A taken identifier produces no row and is reported as
/// `UsuarioError::DuplicateKey`. Missing text fields are bound as `NULL`, so
/// the column constraints reject them with a database error.
pub async fn insert(pool: &SqlitePool, record: &NewUserRecord) -> Result<UserRecord> {
    let row = sqlx::query_as::<_, UserRecord>(
        "INSERT INTO usuario (id, name, birth_date)
         VALUES (?, ?, ?)
         ON CONFLICT(id) DO NOTHING
         RETURNING id, name, birth_date",
    )
    .bind(record.id)
    .bind(&record.name)
    .bind(&record.birth_date)
    .fetch_optional(pool)
    .await?;

    row.ok_or(UsuarioError::DuplicateKey(record.id))
}

/// Count stored records
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuario")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
