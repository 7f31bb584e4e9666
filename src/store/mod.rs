//! Store Module
//!
//! Collaborator traits for the relational store and the key-value cache,
//! with PostgreSQL, Redis and in-memory implementations.

mod memory;
mod postgres;
mod redis;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Person;

pub use self::memory::{MemoryCacheStore, MemoryRecordStore};
pub use self::postgres::PgRecordStore;
pub use self::redis::RedisCacheStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Record Store ==
/// Source of truth for person records. Read-only from this service.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches the first row whose identifier equals `id`.
    async fn fetch(&self, id: i64) -> StoreResult<Option<Person>>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

// == Cache Store ==
/// String key-value cache. Entries never expire.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the cached value, or `None` on a miss.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Creates or overwrites `key` with no expiration.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
