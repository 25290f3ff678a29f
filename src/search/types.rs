use serde::{Deserialize, Serialize};

/// A terms-aggregation bucket key: the engine reports strings for text fields
/// and integers for numeric ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketKey {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationBucket {
    pub key: BucketKey,
    pub doc_count: u64,
}

/// One field's facet counts, in the engine's terms-aggregation shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub doc_count_error_upper_bound: i64,
    pub sum_other_doc_count: u64,
    pub buckets: Vec<AggregationBucket>,
}

/// Paginated search result envelope, generic over the dataset's record shape
/// `T` and aggregation-response shape `A`.
///
/// `start` and `size` echo the request's resolved values; they are never
/// derived from the returned page, so a window past the end of the data keeps
/// the requested values alongside an empty `results`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse<T, A> {
    pub total: u64,
    pub start: u64,
    pub size: u64,
    pub results: Vec<T>,
    pub aggregations: A,
}

/// Detail lookup envelope: zero or one record in practice, but this layer
/// reports whatever the engine returned.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetailsResponse<T> {
    pub results: Vec<T>,
}
