//! Data Portal Dataset Module
//!
//! The one dataset served today: genome submission metadata indexed under
//! `data_portal`.
//!
//! ## Overview
//! This module is the per-dataset instantiation of the generic machinery: a
//! concrete record shape, the aggregation-response shape for the filterable
//! fields, a strict search-parameter shape, the static schema definition, and
//! the two read-only HTTP handlers. Adding another dataset means repeating
//! exactly this pattern against the same `schema`/`query`/`search` modules.
//!
//! ## Submodules
//! - **`types`**: Wire types derived from the field list (record, aggregations,
//!   search parameters).
//! - **`handlers`**: Axum handlers for list/search and detail lookup.

pub mod handlers;
pub mod types;


use crate::schema::{DatasetSchema, FieldDefinition, FieldType, SortOrder};

/// The `data_portal` dataset definition.
///
/// The three `*Status` fields are the filterable subset; everything else is
/// searchable through free text and sortable, but takes no filter parameter.
pub fn portal_schema() -> DatasetSchema {
    DatasetSchema::new(
        "data_portal",
        vec![
            FieldDefinition::new("taxId", FieldType::Integer),
            FieldDefinition::new("scientificName", FieldType::Text),
            FieldDefinition::new("commonName", FieldType::Text),
            FieldDefinition::new("phylogeny", FieldType::StringMap),
            FieldDefinition::new("samples", FieldType::ObjectList),
            FieldDefinition::new("currentStatus", FieldType::Text),
            FieldDefinition::new("currentStatusOrder", FieldType::Integer),
            FieldDefinition::filterable("bioSamplesStatus", FieldType::Text),
            FieldDefinition::filterable("rawDataStatus", FieldType::Text),
            FieldDefinition::filterable("assembliesStatus", FieldType::Text),
            FieldDefinition::new("rawData", FieldType::ObjectList),
            FieldDefinition::new("assemblies", FieldType::ObjectList),
        ],
        "currentStatusOrder",
        SortOrder::Desc,
    )
}
