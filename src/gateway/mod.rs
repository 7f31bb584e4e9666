//! Gateway Module
//!
//! Coordinates the relational store and the cache for person records.

mod record;


pub use record::RecordGateway;
