//! Request DTOs for the person gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{GatewayError, Result};

/// Request body for the upsert operation (POST /person)
///
/// # Fields
/// - `id`: Identifier of the row to mirror into the cache (0 when absent)
/// - `name`: Accepted for compatibility, replaced by the canonical value
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl PersonRequest {
    /// Decodes a raw request body.
    ///
    /// The content type of the request is not consulted.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| GatewayError::InvalidPayload(e.to_string()))
    }
}
