use serde::Deserialize;
use serde_json::Value;

/// The engine's raw search response envelope.
///
/// Only the parts the portal consumes are modeled: the exact hit total, each
/// hit's stored document, and the aggregation section verbatim. Scores and
/// other engine metadata are dropped at deserialization.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    pub hits: RawHits,
    #[serde(default)]
    pub aggregations: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawHits {
    pub total: RawTotal,
    pub hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
pub struct RawTotal {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_source")]
    pub source: Value,
}
