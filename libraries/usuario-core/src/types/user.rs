/// User record domain type
use serde::{Deserialize, Serialize};

/// National identifier used as the natural key of a user record
pub type UserId = i64;

/// A person registered in the store
///
/// The identifier is supplied by the client and never generated.
/// `birth_date` is kept as the text the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    /// National identifier
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 12345678901_i64))]
    pub id: UserId,

    /// Full name
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,

    /// Birth date, e.g. `1990-01-01`
    #[cfg_attr(feature = "openapi", schema(format = Date, example = "1990-01-01"))]
    pub birth_date: String,
}

impl UserRecord {
    /// Create a new user record
    pub fn new(id: UserId, name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// A record as submitted for insertion
///
/// Text fields the client left out stay `None` and reach the store as
/// `NULL`, where the column constraints decide whether the write succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    /// National identifier
    pub id: UserId,

    /// Full name, if given
    pub name: Option<String>,

    /// Birth date text, if given
    pub birth_date: Option<String>,
}

impl From<UserRecord> for NewUserRecord {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: Some(record.name),
            birth_date: Some(record.birth_date),
        }
    }
}
