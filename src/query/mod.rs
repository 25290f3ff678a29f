//! Query Builder Module
//!
//! Translates resolved search parameters into the engine's query document.
//!
//! ## Overview
//! One logical search maps to exactly one engine call. The builder is a pure
//! function from a [`QueryPlan`] (the parameters after defaults have been
//! resolved against the dataset schema) and the dataset's filterable field list
//! to a JSON query document:
//!
//! - a `multi_match` over all fields when free text is present, `match_all`
//!   otherwise;
//! - one single-value `terms` filter per supplied filter parameter, AND-combined
//!   and kept out of the relevance clause;
//! - one `terms` aggregation per filterable field, always requested so facet
//!   counts are available even for filters not currently applied;
//! - exactly one sort clause and a pass-through pagination window.

pub mod builder;


pub use builder::{build_search_body, QueryPlan};
