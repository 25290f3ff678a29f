use crate::schema::SortOrder;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Search parameters after defaults have been resolved against the dataset
/// schema. Built fresh for every request; never persisted.
///
/// `filters` maps filterable field names to the single scalar value supplied
/// for each. A `BTreeMap` keeps clause order alphabetical and deterministic.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub q: Option<String>,
    pub start: u64,
    pub size: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, Value>,
}

/// Builds the engine query document for one search.
///
/// `filterable_fields` is the dataset's alphabetically ordered filterable
/// subset; every entry gets a `terms` aggregation regardless of whether a
/// filter on it was supplied.
pub fn build_search_body(plan: &QueryPlan, filterable_fields: &[&str]) -> Value {
    // Full-text clause: multi-field match, or match everything.
    let must = match plan.q.as_deref() {
        Some(q) if !q.is_empty() => json!({
            "multi_match": {"query": q, "fields": ["*"]}
        }),
        _ => json!({"match_all": {}}),
    };

    // Exact-match filters, one single-value terms clause per supplied field.
    // These live in the bool filter context: inclusion only, no scoring.
    let filters: Vec<Value> = plan
        .filters
        .iter()
        .map(|(field, value)| json!({"terms": {(field.as_str()): [value]}}))
        .collect();

    let mut body = Map::new();
    body.insert("from".to_string(), json!(plan.start));
    body.insert("size".to_string(), json!(plan.size));
    // The response contract promises an exact total, not the engine's
    // default capped estimate.
    body.insert("track_total_hits".to_string(), json!(true));
    body.insert(
        "query".to_string(),
        json!({"bool": {"must": must, "filter": filters}}),
    );

    // Facet aggregations for every filterable field, applied or not.
    if !filterable_fields.is_empty() {
        let mut aggs = Map::new();
        for field in filterable_fields {
            aggs.insert((*field).to_string(), json!({"terms": {"field": field}}));
        }
        body.insert("aggs".to_string(), Value::Object(aggs));
    }

    body.insert(
        "sort".to_string(),
        json!([{(plan.sort_field.as_str()): {"order": plan.sort_order}}]),
    );

    Value::Object(body)
}
