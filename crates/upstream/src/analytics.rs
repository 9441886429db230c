//! HTTP client for the analytics backend.
//!
//! The analytics service exposes plain JSON-over-HTTP endpoints. Queries
//! and bodies pass through untouched; the caller's identity travels as
//! `x-user-*` headers exactly as the upstream proxy would send them.

use std::time::Duration;

use campus_core::identity::IdentityContext;

use crate::error::UpstreamError;
use crate::with_identity;

/// HTTP client for the analytics backend.
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyticsClient {
    /// Create a client targeting the analytics service base URL
    /// (e.g. `http://analytics-service:8001`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build analytics HTTP client");
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        AnalyticsClient { http, base_url }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the analytics dashboard (analytics branch of the aggregate
    /// endpoint). `query` is forwarded verbatim.
    pub async fn dashboard(
        &self,
        identity: &IdentityContext,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}/analytics/dashboard", self.base_url);
        let request = with_identity(self.http.get(&url), identity).query(query);
        Self::execute(request).await
    }

    /// Run an analytics query, forwarding the request body verbatim.
    pub async fn query(
        &self,
        identity: &IdentityContext,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}/analytics/query", self.base_url);
        let request = with_identity(self.http.post(&url), identity).json(body);
        Self::execute(request).await
    }

    /// Send a request and decode the JSON response body.
    async fn execute(request: reqwest::RequestBuilder) -> Result<serde_json::Value, UpstreamError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::HttpStatus(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
