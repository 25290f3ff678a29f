use super::types::{PortalAggregations, PortalRecord, PortalSearchParams};
use crate::api::{ApiError, StrictQuery};
use crate::engine::SearchEngine;
use crate::schema::DatasetSchema;
use crate::search::{execute_search, fetch_details, DetailsResponse, SearchResponse};
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /data_portal` — paginated list/search with facet aggregations.
pub async fn handle_portal_search(
    StrictQuery(params): StrictQuery<PortalSearchParams>,
    Extension(engine): Extension<Arc<dyn SearchEngine>>,
    Extension(schema): Extension<Arc<DatasetSchema>>,
) -> Result<Json<SearchResponse<PortalRecord, PortalAggregations>>, ApiError> {
    params.validate()?;
    let plan = params.plan(&schema);

    let response = execute_search(engine.as_ref(), &schema, &plan).await?;
    Ok(Json(response))
}

/// `GET /data_portal/:record_id` — detail lookup by document identifier.
///
/// An unknown identifier is not an error: the envelope simply carries zero
/// results and the caller decides what that means.
pub async fn handle_portal_details(
    Path(record_id): Path<String>,
    Extension(engine): Extension<Arc<dyn SearchEngine>>,
    Extension(schema): Extension<Arc<DatasetSchema>>,
) -> Result<Json<DetailsResponse<PortalRecord>>, ApiError> {
    let response = fetch_details(engine.as_ref(), schema.name, &record_id).await?;
    Ok(Json(response))
}
