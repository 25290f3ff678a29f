//! Data Portal Search API Library
//!
//! This library crate defines the core modules of the data-portal backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The backend is a thin, strongly-typed translation layer between HTTP query
//! parameters and an external search engine:
//!
//! - **`schema`**: The declarative field registry. Each dataset is described once
//!   as an ordered list of typed fields; the filterable subset of that list drives
//!   both filter binding and aggregation requests.
//! - **`query`**: The query builder. Turns resolved search parameters into the
//!   engine's query document (bool must/filter, terms aggregations, sort,
//!   pagination window).
//! - **`engine`**: The search-engine boundary. A trait seam over the engine's
//!   `_search` API plus the HTTP client implementation shared process-wide.
//! - **`search`**: The response shaper. Generic paginated/detail envelopes and the
//!   orchestration that runs one query and packages the raw engine result.
//! - **`portal`**: The `data_portal` dataset. Concrete record, aggregation and
//!   parameter types plus the two HTTP handlers. New datasets repeat this pattern.
//! - **`api`**: Transport plumbing shared across datasets: the error-to-status
//!   mapping and the strict query-parameter extractor.

pub mod api;
pub mod engine;
pub mod portal;
pub mod query;
pub mod schema;
pub mod search;
