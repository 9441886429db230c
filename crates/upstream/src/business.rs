//! Remote-procedure client for the business backend.
//!
//! The business service (courses, grades, records) speaks JSON-RPC 2.0
//! over HTTP POST. Payloads pass through as raw JSON: this layer
//! orchestrates and forwards, it does not interpret business data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use campus_core::identity::IdentityContext;
use campus_core::types::DbId;
use serde::Serialize;

use crate::error::UpstreamError;
use crate::rpc::{RpcRequest, RpcResponse};
use crate::with_identity;

/// Query parameters for the paginated course list.
#[derive(Debug, Default, Serialize)]
pub struct CourseQuery {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Query parameters for the grade listing.
#[derive(Debug, Default, Serialize)]
pub struct GradeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Query parameters for the business record listing.
#[derive(Debug, Default, Serialize)]
pub struct RecordQuery {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// JSON-RPC client for the business backend.
pub struct BusinessClient {
    http: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl BusinessClient {
    /// Create a client targeting the business service RPC endpoint.
    ///
    /// `timeout` bounds each individual call at the transport level; the
    /// aggregation gateway applies its own branch timeout on top.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build business RPC HTTP client");
        BusinessClient {
            http,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        }
    }

    /// RPC endpoint URL this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one remote procedure call with identity metadata attached.
    async fn call<P: Serialize>(
        &self,
        identity: &IdentityContext,
        method: &str,
        params: P,
    ) -> Result<serde_json::Value, UpstreamError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        let response = with_identity(self.http.post(&self.endpoint), identity)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::HttpStatus(status.as_u16()));
        }

        let envelope: RpcResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        envelope.into_result()
    }

    /// Fetch the caller's business summary (dashboard branch of the
    /// aggregate endpoint).
    pub async fn get_summary(
        &self,
        identity: &IdentityContext,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "campus.getSummary",
            serde_json::json!({ "user_id": identity.user_id }),
        )
        .await
    }

    /// Fetch a paginated course list.
    pub async fn get_courses(
        &self,
        identity: &IdentityContext,
        query: &CourseQuery,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(identity, "campus.getCourses", query).await
    }

    /// Fetch the caller's grades.
    pub async fn get_grades(
        &self,
        identity: &IdentityContext,
        query: &GradeQuery,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "campus.getGrades",
            serde_json::json!({ "user_id": identity.user_id, "filter": query }),
        )
        .await
    }

    /// List the caller's business records.
    pub async fn list_records(
        &self,
        identity: &IdentityContext,
        query: &RecordQuery,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "business.listRecords",
            serde_json::json!({ "user_id": identity.user_id, "filter": query }),
        )
        .await
    }

    /// Create a business record owned by the caller.
    pub async fn create_record(
        &self,
        identity: &IdentityContext,
        record: &serde_json::Value,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "business.createRecord",
            serde_json::json!({ "user_id": identity.user_id, "record": record }),
        )
        .await
    }

    /// Update one of the caller's business records.
    pub async fn update_record(
        &self,
        identity: &IdentityContext,
        record_id: DbId,
        record: &serde_json::Value,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "business.updateRecord",
            serde_json::json!({ "user_id": identity.user_id, "id": record_id, "record": record }),
        )
        .await
    }

    /// Delete one of the caller's business records.
    pub async fn delete_record(
        &self,
        identity: &IdentityContext,
        record_id: DbId,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.call(
            identity,
            "business.deleteRecord",
            serde_json::json!({ "user_id": identity.user_id, "id": record_id }),
        )
        .await
    }
}
