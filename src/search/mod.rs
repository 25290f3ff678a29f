//! Response Shaper Module
//!
//! Runs one search against the engine and packages the result.
//!
//! ## Overview
//! This module owns the typed envelopes the API returns and the orchestration
//! between the query builder and the engine boundary. The envelopes are generic
//! over the dataset's record and aggregation-response shapes, so every dataset
//! reuses the same search/detail code paths with its own concrete types.
//!
//! ## Responsibilities
//! - **`execute_search`**: build the query document, call the engine once,
//!   extract total/hits/aggregations into a [`SearchResponse`].
//! - **`fetch_details`**: escape a record identifier, look it up by `_id` and
//!   return whatever the engine found (zero results is not an error here).
//! - **Failure collapse**: every engine-side failure becomes one uniform
//!   [`SearchError::Engine`] carrying the underlying message.

pub mod service;
pub mod types;


pub use service::{execute_search, fetch_details, SearchError};
pub use types::{Aggregation, AggregationBucket, BucketKey, DetailsResponse, SearchResponse};
