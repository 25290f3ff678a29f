//! Recording fake engine for tests.
//!
//! Stores a canned raw response as JSON and records every call it receives, so
//! tests can assert both on the query documents sent to the engine and on
//! whether the engine was contacted at all.

use super::client::SearchEngine;
use super::types::RawSearchResponse;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

pub struct FakeEngine {
    raw: Value,
    fail_with: Option<String>,
    pub searches: Mutex<Vec<(String, Value)>>,
    pub lookups: Mutex<Vec<(String, String)>>,
}

impl FakeEngine {
    /// A fake that answers every call with the given raw engine response.
    pub fn with_raw(raw: Value) -> Self {
        Self {
            raw,
            fail_with: None,
            searches: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// A fake with no hits and no aggregations.
    pub fn empty() -> Self {
        Self::with_raw(json!({
            "hits": {"total": {"value": 0}, "hits": []}
        }))
    }

    /// A fake whose every call fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            raw: Value::Null,
            fail_with: Some(message.to_string()),
            searches: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    fn answer(&self) -> Result<RawSearchResponse> {
        if let Some(message) = &self.fail_with {
            return Err(anyhow::anyhow!("{}", message));
        }
        Ok(serde_json::from_value(self.raw.clone())?)
    }
}

#[async_trait]
impl SearchEngine for FakeEngine {
    async fn search(&self, index: &str, body: Value) -> Result<RawSearchResponse> {
        self.searches
            .lock()
            .unwrap()
            .push((index.to_string(), body));
        self.answer()
    }

    async fn lookup(&self, index: &str, query: &str) -> Result<RawSearchResponse> {
        self.lookups
            .lock()
            .unwrap()
            .push((index.to_string(), query.to_string()));
        self.answer()
    }
}
