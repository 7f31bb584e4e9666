//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers only extract
//! inputs and delegate to the [`RecordGateway`].

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::gateway::RecordGateway;
use crate::models::{CachedPersonResponse, HealthResponse, PersonResponse, PingResponse};
use crate::store::{CacheStore, MemoryCacheStore, MemoryRecordStore, RecordStore};

/// Application state shared across all handlers.
///
/// Holds the gateway, which in turn holds the shared store handles.
#[derive(Clone)]
pub struct AppState {
    pub gateway: RecordGateway,
}

impl AppState {
    /// Creates a new AppState over the given stores.
    pub fn new(records: Arc<dyn RecordStore>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            gateway: RecordGateway::new(records, cache),
        }
    }

    /// Creates an AppState backed by fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRecordStore::new()),
            Arc::new(MemoryCacheStore::new()),
        )
    }
}

/// Handler for GET /
pub async fn ping_handler(State(state): State<AppState>) -> Json<PingResponse> {
    Json(state.gateway.ping())
}

/// Handler for POST /person
///
/// The body is read raw so that malformed JSON maps onto the gateway's
/// own error instead of the extractor rejection.
pub async fn upsert_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PersonResponse>> {
    let person = state.gateway.upsert(&body).await?;
    Ok(Json(PersonResponse::from(person)))
}

/// Handler for GET /person/*rest and GET /person/
///
/// The identifier is the last segment of the path, so `/person/a/b` looks
/// up `b` and `/person/7/` has no identifier.
pub async fn lookup_handler(
    State(state): State<AppState>,
    rest: Option<Path<String>>,
) -> Result<Json<CachedPersonResponse>> {
    let rest = rest.map(|Path(rest)| rest);
    let id = rest.as_deref().and_then(|rest| rest.rsplit('/').next());
    let cached = state.gateway.lookup(id).await?;
    Ok(Json(cached))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let report = state.gateway.health().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
