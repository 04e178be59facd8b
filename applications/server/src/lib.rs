//! Usuario Server Library
//!
//! HTTP service for creating and fetching user records keyed by national
//! identifier, with generated OpenAPI documentation.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::{create_router, ApiDoc};
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
