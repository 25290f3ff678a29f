use super::types::RawSearchResponse;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The contract required from the external search engine.
///
/// Two operations cover the whole portal: a structured-body search and a
/// query-string lookup (used for by-identifier detail fetches). Handlers hold
/// the engine as a trait object so tests can substitute a recording fake.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Executes a structured query document against an index.
    async fn search(&self, index: &str, body: Value) -> Result<RawSearchResponse>;

    /// Executes a query-string search (`q=...`) against an index.
    async fn lookup(&self, index: &str, query: &str) -> Result<RawSearchResponse>;
}

/// HTTP client for the engine's `_search` API.
///
/// Owns a shared `reqwest` connection pool; one instance is created at process
/// start and lives until shutdown. No retries, no caching: every call reaches
/// the engine fresh, and a failed call surfaces as an error on the one request
/// waiting for it.
pub struct EsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl EsClient {
    pub fn new(base_url: &str, username: Option<String>, password: Option<String>) -> Self {
        let credentials = username.map(|user| (user, password.unwrap_or_default()));

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.base_url, index)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => request.basic_auth(user, Some(pass)),
            None => request,
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<RawSearchResponse> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("engine returned {}: {}", status, detail));
        }

        Ok(response.json::<RawSearchResponse>().await?)
    }
}

#[async_trait]
impl SearchEngine for EsClient {
    async fn search(&self, index: &str, body: Value) -> Result<RawSearchResponse> {
        let request = self.http.post(self.search_url(index)).json(&body);
        self.execute(self.with_auth(request)).await
    }

    async fn lookup(&self, index: &str, query: &str) -> Result<RawSearchResponse> {
        let request = self
            .http
            .get(self.search_url(index))
            .query(&[("q", query)]);
        self.execute(self.with_auth(request)).await
    }
}
