//! Record Gateway
//!
//! Write path: re-read the canonical row from the relational store and
//! mirror it into the cache. Read path: serve from the cache only.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::{GatewayError, Result};
use crate::models::{CachedPersonResponse, HealthResponse, Person, PersonRequest, PingResponse};
use crate::store::{CacheStore, RecordStore};

// == Record Gateway ==
/// Shared handles to both stores. Cloning is cheap.
#[derive(Clone)]
pub struct RecordGateway {
    records: Arc<dyn RecordStore>,
    cache: Arc<dyn CacheStore>,
}

impl RecordGateway {
    pub fn new(records: Arc<dyn RecordStore>, cache: Arc<dyn CacheStore>) -> Self {
        Self { records, cache }
    }

    // == Ping ==
    pub fn ping(&self) -> PingResponse {
        info!("PING request received");
        PingResponse::pong()
    }

    // == Lookup ==
    /// Serves a person from the cache. The key is used verbatim; there is
    /// no fallback to the relational store.
    pub async fn lookup(&self, identifier: Option<&str>) -> Result<CachedPersonResponse> {
        info!("GET request received");

        let id = match identifier {
            Some(id) if !id.is_empty() => id,
            _ => {
                warn!("lookup rejected: identifier missing");
                return Err(GatewayError::MissingIdentifier);
            }
        };

        match self.cache.get(id).await {
            Ok(Some(name)) => Ok(CachedPersonResponse::new(id, name)),
            Ok(None) => {
                warn!(key = %id, "failed to get data from cache: miss");
                Err(GatewayError::CacheLookupFailed(format!(
                    "no cached entry for key '{}'",
                    id
                )))
            }
            Err(e) => {
                error!(key = %id, error = %e, "failed to get data from cache");
                Err(GatewayError::CacheLookupFailed(e.to_string()))
            }
        }
    }

    // == Upsert ==
    /// Decodes `body`, loads the canonical row for its identifier and
    /// mirrors that row into the cache. The submitted name is discarded.
    pub async fn upsert(&self, body: &[u8]) -> Result<Person> {
        info!("POST request received");
        debug!(body = %String::from_utf8_lossy(body), "request body");

        let candidate = PersonRequest::from_json(body).inspect_err(|e| {
            warn!(error = %e, "upsert rejected: malformed payload");
        })?;

        let person = match self.records.fetch(candidate.id).await {
            Ok(Some(person)) => person,
            Ok(None) => {
                warn!(id = candidate.id, "failed to scan row: no rows in result set");
                return Err(GatewayError::RecordNotFound(format!(
                    "no person with id {}",
                    candidate.id
                )));
            }
            Err(e) => {
                error!(id = candidate.id, error = %e, "failed to query person");
                return Err(GatewayError::RecordNotFound(e.to_string()));
            }
        };

        if let Err(e) = self.cache.set(&person.cache_key(), &person.name).await {
            error!(id = person.id, error = %e, "could not set cache key");
            return Err(GatewayError::CacheWriteFailed(e.to_string()));
        }

        debug!(id = person.id, "person mirrored into cache");
        Ok(person)
    }

    // == Health ==
    /// Pings both stores.
    pub async fn health(&self) -> HealthResponse {
        let database_up = self.records.ping().await.is_ok();
        let cache_up = self.cache.ping().await.is_ok();
        if !(database_up && cache_up) {
            warn!(database_up, cache_up, "health check degraded");
        }
        HealthResponse::from_checks(database_up, cache_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryCacheStore, MemoryRecordStore};

    fn gateway_with(rows: Vec<Person>) -> (RecordGateway, MemoryRecordStore, MemoryCacheStore) {
        let records = MemoryRecordStore::with_rows(rows);
        let cache = MemoryCacheStore::new();
        let gateway = RecordGateway::new(Arc::new(records.clone()), Arc::new(cache.clone()));
        (gateway, records, cache)
    }

    #[tokio::test]
    async fn test_ping() {
        let (gateway, _, _) = gateway_with(vec![]);
        assert_eq!(gateway.ping().ping, "pong");
    }

    #[tokio::test]
    async fn test_upsert_returns_canonical_name() {
        let (gateway, _, cache) = gateway_with(vec![Person::new(7, "Alice")]);

        let person = gateway.upsert(br#"{"id":7,"name":"ignored"}"#).await.unwrap();

        assert_eq!(person, Person::new(7, "Alice"));
        assert_eq!(cache.peek("7").await.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_upsert_then_lookup() {
        let (gateway, _, _) = gateway_with(vec![Person::new(7, "Alice")]);

        gateway.upsert(br#"{"id":7}"#).await.unwrap();
        let cached = gateway.lookup(Some("7")).await.unwrap();

        assert_eq!(cached.id, "7");
        assert_eq!(cached.name, "Alice");
    }

    #[tokio::test]
    async fn test_upsert_missing_row_leaves_cache_untouched() {
        let (gateway, _, cache) = gateway_with(vec![]);

        let result = gateway.upsert(br#"{"id":42,"name":"Ghost"}"#).await;

        assert!(matches!(result, Err(GatewayError::RecordNotFound(_))));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_upsert_database_down() {
        let (gateway, records, cache) = gateway_with(vec![Person::new(7, "Alice")]);
        records.set_available(false);

        let result = gateway.upsert(br#"{"id":7}"#).await;

        assert!(matches!(result, Err(GatewayError::RecordNotFound(_))));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_upsert_malformed_short_circuits() {
        let (gateway, records, cache) = gateway_with(vec![Person::new(0, "Zero")]);
        // A zero-valued record must not reach the store
        records.set_available(false);

        let result = gateway.upsert(b"not json").await;

        assert!(matches!(result, Err(GatewayError::InvalidPayload(_))));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_upsert_cache_down_is_recoverable() {
        let (gateway, _, cache) = gateway_with(vec![Person::new(7, "Alice")]);
        cache.set_available(false);

        let result = gateway.upsert(br#"{"id":7}"#).await;
        assert!(matches!(result, Err(GatewayError::CacheWriteFailed(_))));

        cache.set_available(true);
        assert!(gateway.upsert(br#"{"id":7}"#).await.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_missing_identifier() {
        let (gateway, _, _) = gateway_with(vec![]);

        assert!(matches!(
            gateway.lookup(None).await,
            Err(GatewayError::MissingIdentifier)
        ));
        assert!(matches!(
            gateway.lookup(Some("")).await,
            Err(GatewayError::MissingIdentifier)
        ));
    }

    #[tokio::test]
    async fn test_lookup_miss_does_not_consult_records() {
        let (gateway, _, _) = gateway_with(vec![Person::new(7, "Alice")]);

        let result = gateway.lookup(Some("7")).await;
        assert!(matches!(result, Err(GatewayError::CacheLookupFailed(_))));
    }

    #[tokio::test]
    async fn test_lookup_key_is_verbatim() {
        let (gateway, _, cache) = gateway_with(vec![]);
        cache.set("007", "Bond").await.unwrap();

        assert!(gateway.lookup(Some("7")).await.is_err());
        assert_eq!(gateway.lookup(Some("007")).await.unwrap().name, "Bond");
    }

    #[tokio::test]
    async fn test_lookup_cache_down() {
        let (gateway, _, cache) = gateway_with(vec![]);
        cache.set("7", "Alice").await.unwrap();
        cache.set_available(false);

        let result = gateway.lookup(Some("7")).await;
        assert!(matches!(result, Err(GatewayError::CacheLookupFailed(_))));
    }

    #[tokio::test]
    async fn test_health_reports_each_store() {
        let (gateway, records, _) = gateway_with(vec![]);
        assert!(gateway.health().await.is_healthy());

        records.set_available(false);
        let report = gateway.health().await;
        assert_eq!(report.database, "down");
        assert_eq!(report.cache, "up");
    }
}
