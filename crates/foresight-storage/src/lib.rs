//! # foresight-storage
//!
//! Reference implementations of the collaborator store seams: a SQLite store
//! with migrations and transactional write-sets, and an in-memory store for
//! tests and embedding.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::SqliteStore;
pub use memory::MemoryStore;

use foresight_core::errors::{ForesightError, StorageError};

/// Wrap a SQLite failure message as a top-level error.
pub fn to_storage_err(message: String) -> ForesightError {
    ForesightError::StorageError(StorageError::SqliteError { message })
}
