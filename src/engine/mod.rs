//! Search Engine Boundary Module
//!
//! The seam between the portal and the external search engine.
//!
//! ## Overview
//! The engine is a black box: it accepts a structured query document (or a
//! query-string lookup) and returns hits, an exact total and aggregation
//! buckets. This module defines that contract as the [`SearchEngine`] trait,
//! the raw response envelope it returns, and the HTTP client implementation.
//!
//! One [`EsClient`] is constructed at process start and shared across all
//! request handlers; its connection pool is the only process-wide resource.

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{EsClient, SearchEngine};
pub use types::{RawHit, RawHits, RawSearchResponse, RawTotal};
