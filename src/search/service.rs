use super::types::{DetailsResponse, SearchResponse};
use crate::engine::SearchEngine;
use crate::query::{build_search_body, QueryPlan};
use crate::schema::DatasetSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Uniform search failure.
///
/// Connectivity problems, engine-side query errors and undecodable payloads
/// all collapse into one kind carrying the underlying message; this layer does
/// not interpret engine-specific error codes.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search error: {0}")]
    Engine(String),
}

impl SearchError {
    fn engine(err: impl std::fmt::Display) -> Self {
        SearchError::Engine(err.to_string())
    }
}

/// Runs one list search: builds the query document from the plan, calls the
/// engine, and shapes the raw envelope into a typed [`SearchResponse`].
pub async fn execute_search<T, A>(
    engine: &dyn SearchEngine,
    schema: &DatasetSchema,
    plan: &QueryPlan,
) -> Result<SearchResponse<T, A>, SearchError>
where
    T: DeserializeOwned,
    A: DeserializeOwned,
{
    let filterable = schema.filterable_fields();
    let body = build_search_body(plan, &filterable);

    let raw = engine
        .search(schema.name, body)
        .await
        .map_err(SearchError::engine)?;

    let total = raw.hits.total.value;
    let results = raw
        .hits
        .hits
        .into_iter()
        .map(|hit| serde_json::from_value::<T>(hit.source))
        .collect::<Result<Vec<T>, _>>()
        .map_err(SearchError::engine)?;

    // Datasets with no filterable fields get no aggregations section at all;
    // their aggregation-response shape deserializes from an empty object.
    let aggregations = raw
        .aggregations
        .unwrap_or_else(|| Value::Object(Default::default()));
    let aggregations = serde_json::from_value::<A>(aggregations).map_err(SearchError::engine)?;

    Ok(SearchResponse {
        total,
        start: plan.start,
        size: plan.size,
        results,
        aggregations,
    })
}

/// Looks up a record by exact document identifier.
///
/// The identifier ends up inside an engine query string, so it is
/// percent-encoded first; characters significant to the engine's query syntax
/// (such as `:`) are then matched literally.
pub async fn fetch_details<T>(
    engine: &dyn SearchEngine,
    index: &str,
    record_id: &str,
) -> Result<DetailsResponse<T>, SearchError>
where
    T: DeserializeOwned,
{
    let query = format!("_id:{}", urlencoding::encode(record_id));

    let raw = engine
        .lookup(index, &query)
        .await
        .map_err(SearchError::engine)?;

    let results = raw
        .hits
        .hits
        .into_iter()
        .map(|hit| serde_json::from_value::<T>(hit.source))
        .collect::<Result<Vec<T>, _>>()
        .map_err(SearchError::engine)?;

    Ok(DetailsResponse { results })
}
