//! Field Schema Registry Module
//!
//! Declarative description of the datasets served by the portal.
//!
//! ## Overview
//! Each dataset is defined exactly once, at process start, as an ordered list of
//! typed fields plus a default sort. Everything else derives from that single
//! definition: which query parameters exist, which filters are legal, and which
//! aggregations are requested on every search.
//!
//! ## Responsibilities
//! - **Field typing**: Naming each indexed field and its semantic type.
//! - **Filterable subset**: Exposing the alphabetically ordered set of fields
//!   that accept exact-match filters and produce facet aggregations.
//! - **Defaults**: Carrying the dataset's default sort field and order.
//!
//! Schemas are immutable after construction; a malformed definition (for example
//! a filterable field with a non-scalar type) is a programming error and fails
//! at construction time, not at request time.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{DatasetSchema, FieldDefinition, FieldType, SortOrder};
