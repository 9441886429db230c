//! The aggregation gateway: concurrent fan-out over the downstream
//! services with a partial-failure-tolerant merge.
//!
//! Both branches launch simultaneously and the gateway waits for all of
//! them to settle -- never just the first. A branch that fails or exceeds
//! its timeout contributes a branch-scoped error instead of failing the
//! request, so aggregate latency is bounded by the slowest branch, not the
//! sum. Dropping the request future (client disconnect) cancels both
//! in-flight branch calls; the branches share no state, so cancelling one
//! never affects the other. The gateway performs no retries.

use std::sync::Arc;
use std::time::Duration;

use campus_core::identity::IdentityContext;
use campus_upstream::{AnalyticsClient, BranchOutcome, BusinessClient, UpstreamError};
use serde::Serialize;
use tokio::time::error::Elapsed;

/// The merged result of one aggregate call. Ephemeral; never persisted.
#[derive(Debug, Serialize)]
pub struct AggregatedSummary {
    pub business: BranchOutcome,
    pub analytics: BranchOutcome,
}

/// Pure orchestration layer over the two backend clients. Owns no
/// persistent state.
pub struct AggregationGateway {
    business: Arc<BusinessClient>,
    analytics: Arc<AnalyticsClient>,
    branch_timeout: Duration,
}

impl AggregationGateway {
    pub fn new(
        business: Arc<BusinessClient>,
        analytics: Arc<AnalyticsClient>,
        branch_timeout: Duration,
    ) -> Self {
        AggregationGateway {
            business,
            analytics,
            branch_timeout,
        }
    }

    /// Client for single-branch business passthrough calls.
    pub fn business(&self) -> &BusinessClient {
        &self.business
    }

    /// Client for single-branch analytics passthrough calls.
    pub fn analytics(&self) -> &AnalyticsClient {
        &self.analytics
    }

    /// Fan out to both backends concurrently and merge the outcomes.
    ///
    /// The caller's identity is forwarded to each branch as metadata, so
    /// the branches perform no authentication of their own.
    pub async fn summary(&self, identity: &IdentityContext) -> AggregatedSummary {
        let business = tokio::time::timeout(self.branch_timeout, self.business.get_summary(identity));
        let analytics =
            tokio::time::timeout(self.branch_timeout, self.analytics.dashboard(identity, &[]));

        let (business, analytics) = tokio::join!(business, analytics);

        AggregatedSummary {
            business: settle("business", business),
            analytics: settle("analytics", analytics),
        }
    }
}

/// Collapse one settled branch into its outcome, logging failures with
/// the branch name for diagnosis.
fn settle(
    branch: &'static str,
    settled: Result<Result<serde_json::Value, UpstreamError>, Elapsed>,
) -> BranchOutcome {
    match settled {
        Ok(Ok(data)) => BranchOutcome::ok(data),
        Ok(Err(e)) => {
            tracing::warn!(branch, error = %e, "Aggregation branch failed");
            BranchOutcome::err(e.to_string())
        }
        Err(_) => {
            tracing::warn!(branch, "Aggregation branch timed out");
            BranchOutcome::err(format!("{branch} branch timed out"))
        }
    }
}
