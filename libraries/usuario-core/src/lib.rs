//! Usuario Core
//!
//! Core types, traits, and error handling for the Usuario registry.
//!
//! This crate provides the building blocks shared by the storage layer and
//! the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `NewUserRecord`, `UserId`
//! - **Core Traits**: `RecordStore`
//! - **Error Handling**: Unified `UsuarioError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use usuario_core::types::UserRecord;
//!
//! let record = UserRecord::new(12345678901, "Ana", "1990-01-01");
//! assert_eq!(record.id, 12345678901);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types
pub mod error;
/// Record store trait
pub mod storage;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use error::{Result, UsuarioError};
pub use storage::RecordStore;
pub use types::{NewUserRecord, UserId, UserRecord};
