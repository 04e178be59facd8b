//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;
use usuario_core::{NewUserRecord, RecordStore, Result, UserId, UserRecord, UsuarioError};
use usuario_server::{api, config::DocsSettings, AppState, ServerConfig};
use usuario_storage::SqliteRecordStore;

/// Create an in-memory record store with migrations applied
pub async fn create_test_store() -> Arc<SqliteRecordStore> {
    let store = SqliteRecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create test store");
    Arc::new(store)
}

/// Build the application router around `store` with default docs settings
pub fn create_test_app(store: Arc<dyn RecordStore>) -> Router {
    create_test_app_with_docs(store, &ServerConfig::default().docs)
}

pub fn create_test_app_with_docs(store: Arc<dyn RecordStore>, docs: &DocsSettings) -> Router {
    api::create_router(AppState::new(store), docs)
}

/// Send a JSON POST request
pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Send a GET request
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Read status and JSON body
pub async fn status_and_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    (status, json_body(response).await)
}

/// Record store whose writes always fail
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn exists(&self, _id: UserId) -> Result<bool> {
        Ok(false)
    }

    async fn insert(&self, _record: NewUserRecord) -> Result<UserRecord> {
        Err(UsuarioError::Database(self.message.clone()))
    }

    async fn find(&self, _id: UserId) -> Result<Option<UserRecord>> {
        Ok(None)
    }
}

/// Record store that always reports the identifier as free, then loses
/// the insert to a concurrent writer
pub struct RacingStore;

#[async_trait]
impl RecordStore for RacingStore {
    async fn exists(&self, _id: UserId) -> Result<bool> {
        Ok(false)
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord> {
        Err(UsuarioError::DuplicateKey(record.id))
    }

    async fn find(&self, _id: UserId) -> Result<Option<UserRecord>> {
        Ok(None)
    }
}

/// Test fixtures
pub mod fixtures {
    use serde_json::json;

    pub const ANA_ID: i64 = 12345678901;

    pub fn ana() -> serde_json::Value {
        json!({ "id": ANA_ID, "name": "Ana", "birth_date": "1990-01-01" })
    }
}
