//! Clients for the two downstream services behind the aggregation gateway.
//!
//! - [`business`] -- remote-procedure (JSON-RPC over HTTP) client for the
//!   business backend (courses, grades, records).
//! - [`analytics`] -- plain HTTP JSON client for the analytics backend
//!   (usage statistics, events).
//!
//! Both clients forward the caller's identity as `x-user-*` metadata
//! headers, so downstream services need no separate authentication step.
//! [`BranchOutcome`] is the partial-failure wrapper the gateway merges
//! branch results into.

pub mod analytics;
pub mod business;
mod error;
mod outcome;
mod rpc;

pub use analytics::AnalyticsClient;
pub use business::BusinessClient;
pub use error::UpstreamError;
pub use outcome::BranchOutcome;

use campus_core::identity::{
    IdentityContext, HEADER_USER_EMAIL, HEADER_USER_ID, HEADER_USER_NAME, HEADER_USER_ROLE,
};

/// Attach the caller's identity to an outgoing request as metadata headers.
///
/// This is the propagated equivalent of the trusted headers the gateway
/// itself accepts from its upstream proxy.
fn with_identity(
    request: reqwest::RequestBuilder,
    identity: &IdentityContext,
) -> reqwest::RequestBuilder {
    request
        .header(HEADER_USER_ID, identity.user_id.as_str())
        .header(HEADER_USER_ROLE, identity.role.as_str())
        .header(HEADER_USER_NAME, identity.display_name.as_str())
        .header(HEADER_USER_EMAIL, identity.email.as_str())
}
