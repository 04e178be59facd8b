/// Usuario API routes
use crate::{
    error::{ErrorResponse, Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use usuario_core::{NewUserRecord, UserId, UserRecord};
use utoipa::ToSchema;

/// Body of `POST /usuario`
///
/// Fields are taken loosely and coerced the way the `usuario` columns
/// would coerce them. Text fields left out reach the store as `NULL`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// National identifier, a JSON integer or integer text
    #[schema(value_type = i64, example = 12345678901_i64)]
    pub id: Option<Value>,

    #[schema(value_type = String, example = "Ana")]
    pub name: Option<Value>,

    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birth_date: Option<Value>,
}

impl CreateUserRequest {
    /// Coerce the submitted fields into a record for the store
    ///
    /// Fails only when `id` is missing or does not hold an integer.
    pub fn into_new_record(self) -> Result<NewUserRecord> {
        let id = self
            .id
            .as_ref()
            .and_then(coerce_id)
            .ok_or_else(ServerError::invalid_id)?;

        Ok(NewUserRecord {
            id,
            name: self.name.and_then(coerce_text),
            birth_date: self.birth_date.and_then(coerce_text),
        })
    }
}

/// Integer affinity: JSON integers and text holding an integer
fn coerce_id(value: &Value) -> Option<UserId> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Text affinity: strings verbatim, other scalars as their JSON text
fn coerce_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// POST /usuario
/// Create a new user record
///
/// Answers 400 when the identifier is taken, whether the existence check
/// catches it or a concurrent create wins the insert. A record the store
/// refuses (e.g. a missing `name`) is answered with 500 and the store's message.
#[utoipa::path(
    post,
    path = "/usuario",
    tag = "Usuario",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserRecord),
        (status = 400, description = "User already exists", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserRecord>)> {
    let Json(request) = payload?;
    let record = request.into_new_record()?;

    if app_state.store.exists(record.id).await? {
        tracing::debug!(id = record.id, "User already exists");
        return Err(ServerError::conflict());
    }

    let user = app_state.store.insert(record).await?;
    tracing::info!(id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /usuario/:id
/// Fetch a user record
///
/// A path segment that is not an integer cannot name a record and is
/// answered like any unknown identifier.
#[utoipa::path(
    get,
    path = "/usuario/{id}",
    tag = "Usuario",
    params(
        ("id" = i64, Path, description = "National identifier of the user")
    ),
    responses(
        (status = 200, description = "User record", body = UserRecord),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<UserRecord>> {
    let id: UserId = id.trim().parse().map_err(|_| ServerError::not_found())?;

    let user = app_state
        .store
        .find(id)
        .await?
        .ok_or_else(ServerError::not_found)?;

    Ok(Json(user))
}
