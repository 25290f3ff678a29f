use crate::api::ApiError;
use crate::query::QueryPlan;
use crate::schema::{DatasetSchema, SortOrder};
use crate::search::Aggregation;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

/// One genome record as stored in the `data_portal` index.
///
/// Wire names are camelCase to match the index mapping; extra keys in a stored
/// document are dropped, a missing declared key fails the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalRecord {
    pub tax_id: i64,
    pub scientific_name: String,
    pub common_name: String,
    pub phylogeny: HashMap<String, String>,
    pub samples: Vec<HashMap<String, Option<String>>>,
    pub current_status: String,
    pub current_status_order: i64,
    pub bio_samples_status: String,
    pub raw_data_status: String,
    pub assemblies_status: String,
    pub raw_data: Vec<HashMap<String, Option<String>>>,
    pub assemblies: Vec<HashMap<String, Option<String>>>,
}

/// Facet counts for the dataset's filterable fields, and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalAggregations {
    pub assemblies_status: Aggregation,
    pub bio_samples_status: Aggregation,
    pub raw_data_status: Aggregation,
}

/// Bound query parameters for the list/search operation.
///
/// `deny_unknown_fields` makes binding fail closed: a parameter that is not a
/// basic search control or a filterable field rejects the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalSearchParams {
    pub q: Option<String>,
    #[serde(default)]
    pub start: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    #[serde(rename = "bioSamplesStatus")]
    pub bio_samples_status: Option<String>,
    #[serde(rename = "rawDataStatus")]
    pub raw_data_status: Option<String>,
    #[serde(rename = "assembliesStatus")]
    pub assemblies_status: Option<String>,
}

fn default_page_size() -> u64 {
    10
}

impl PortalSearchParams {
    /// Range checks that serde's type-level binding cannot express.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.size == 0 {
            return Err(ApiError::Validation(
                "size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves defaults against the dataset schema and collects the supplied
    /// filters into a query plan.
    pub fn plan(&self, schema: &DatasetSchema) -> QueryPlan {
        let mut filters = BTreeMap::new();
        let supplied = [
            ("assembliesStatus", &self.assemblies_status),
            ("bioSamplesStatus", &self.bio_samples_status),
            ("rawDataStatus", &self.raw_data_status),
        ];
        for (field, value) in supplied {
            if let Some(value) = value {
                filters.insert(field.to_string(), json!(value));
            }
        }

        QueryPlan {
            q: self.q.clone(),
            start: self.start,
            size: self.size,
            sort_field: self
                .sort_field
                .clone()
                .unwrap_or_else(|| schema.default_sort_field.to_string()),
            sort_order: self.sort_order.unwrap_or(schema.default_sort_order),
            filters,
        }
    }
}
