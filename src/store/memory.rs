//! In-memory stores
//!
//! HashMap-backed stand-ins for PostgreSQL and Redis. Each one carries an
//! availability switch so callers can simulate an outage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CacheStore, RecordStore, StoreResult};
use crate::error::StoreError;
use crate::models::Person;

// == Availability Switch ==
#[derive(Debug)]
struct Availability {
    name: &'static str,
    up: AtomicBool,
}

impl Availability {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            up: AtomicBool::new(true),
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable(self.name.to_string()))
        }
    }

    fn set(&self, up: bool) {
        self.up.store(up, Ordering::SeqCst);
    }
}

// == Memory Record Store ==
/// Relational stand-in keyed by person identifier.
///
/// Clones share the same rows, so a test can keep a handle and edit rows
/// "out-of-band" while the gateway holds another.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore {
    rows: Arc<RwLock<HashMap<i64, String>>>,
    availability: Arc<Availability>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            availability: Arc::new(Availability::new("records")),
        }
    }

    /// Builds a store pre-populated with `people`.
    pub fn with_rows(people: impl IntoIterator<Item = Person>) -> Self {
        let rows = people.into_iter().map(|p| (p.id, p.name)).collect();
        Self {
            rows: Arc::new(RwLock::new(rows)),
            availability: Arc::new(Availability::new("records")),
        }
    }

    /// Inserts or replaces a row.
    pub async fn put(&self, person: Person) {
        self.rows.write().await.insert(person.id, person.name);
    }

    pub fn set_available(&self, up: bool) {
        self.availability.set(up);
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch(&self, id: i64) -> StoreResult<Option<Person>> {
        self.availability.check()?;
        let rows = self.rows.read().await;
        Ok(rows.get(&id).map(|name| Person::new(id, name.clone())))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.availability.check()
    }
}

// == Memory Cache Store ==
/// Key-value stand-in with no expiration and no eviction.
#[derive(Debug, Clone)]
pub struct MemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    availability: Arc<Availability>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            availability: Arc::new(Availability::new("cache")),
        }
    }

    pub fn set_available(&self, up: bool) {
        self.availability.set(up);
    }

    /// Reads an entry without going through the availability switch.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.availability.check()?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.availability.check()?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.availability.check()
    }
}
