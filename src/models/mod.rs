//! Request and Response models for the person gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod person;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use person::Person;
pub use requests::PersonRequest;
pub use responses::{
    CachedPersonResponse, ErrorResponse, HealthResponse, PersonResponse, PingResponse,
};
