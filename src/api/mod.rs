//! API Module
//!
//! HTTP handlers and routing for the person gateway REST API.
//!
//! # Endpoints
//! - `GET /` - Liveness ping
//! - `POST /person` - Mirror a person from the database into the cache
//! - `GET /person/*rest` - Read a person from the cache by the last path segment
//! - `GET /health` - Store connectivity report

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
