//! Person Cache - mirrors Person records from PostgreSQL into Redis
//!
//! Writes re-read the canonical row from the database and copy it into the
//! cache; reads are served from the cache alone.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::{Config, StoreBackend};
pub use gateway::RecordGateway;
