//! Response DTOs for the person gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Person;

/// Response body for the ping endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub ping: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            ping: "pong".to_string(),
        }
    }
}

/// Response body for the upsert operation (POST /person)
///
/// Carries the canonical record read back from the relational store.
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
        }
    }
}

/// Response body for the lookup operation (GET /person/:id)
///
/// The identifier is echoed back exactly as it appeared in the path.
#[derive(Debug, Clone, Serialize)]
pub struct CachedPersonResponse {
    pub id: String,
    pub name: String,
}

impl CachedPersonResponse {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// "up" or "down"
    pub cache: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Builds the report from the outcome of pinging each store.
    pub fn from_checks(database_up: bool, cache_up: bool) -> Self {
        let label = |up: bool| if up { "up" } else { "down" }.to_string();
        Self {
            status: if database_up && cache_up {
                "healthy"
            } else {
                "degraded"
            }
            .to_string(),
            database: label(database_up),
            cache: label(cache_up),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error response body for store-layer failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
