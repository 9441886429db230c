//! HTTP-level integration tests for the aggregation gateway and the
//! single-branch passthrough endpoints, using throwaway local mock
//! services as the business and analytics backends.

mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use common::{body_json, send, spawn_analytics_mock, spawn_business_mock, trusted_request};
use sqlx::PgPool;

const FAST: Duration = Duration::from_millis(0);

// ---------------------------------------------------------------------------
// Aggregate summary
// ---------------------------------------------------------------------------

/// Both branches healthy: both outcomes succeed and carry data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_both_branches_succeed(pool: PgPool) {
    let business_url = spawn_business_mock(FAST, false).await;
    let analytics_url = spawn_analytics_mock(FAST, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let response = send(
        app,
        trusted_request("GET", "/api/v1/aggregate/summary", "S2024001", "student"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["business"]["success"], true);
    assert_eq!(json["data"]["business"]["data"]["courses"], 5);
    assert!(json["data"]["business"]["error"].is_null());
    assert_eq!(json["data"]["analytics"]["success"], true);
    assert_eq!(json["data"]["analytics"]["data"]["data"]["active_days"], 12);
}

/// A failing business branch never fails the aggregate: the request is
/// still 200/success with the failure scoped to its branch.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_tolerates_business_failure(pool: PgPool) {
    let business_url = spawn_business_mock(FAST, true).await;
    let analytics_url = spawn_analytics_mock(FAST, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let response = send(
        app,
        trusted_request("GET", "/api/v1/aggregate/summary", "S2024001", "student"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["business"]["success"], false);
    assert!(json["data"]["business"]["data"].is_null());
    assert!(json["data"]["business"]["error"].is_string());
    assert_eq!(json["data"]["analytics"]["success"], true);
}

/// And vice versa: a failing analytics branch leaves the business data
/// intact.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_tolerates_analytics_failure(pool: PgPool) {
    let business_url = spawn_business_mock(FAST, false).await;
    let analytics_url = spawn_analytics_mock(FAST, true).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let response = send(
        app,
        trusted_request("GET", "/api/v1/aggregate/summary", "S2024001", "student"),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["business"]["success"], true);
    assert_eq!(json["data"]["analytics"]["success"], false);
    assert!(json["data"]["analytics"]["error"].is_string());
}

/// Branches run concurrently: with two 300 ms branches the aggregate
/// completes in roughly max(300, 300), not their 600 ms sum.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_branches_run_concurrently(pool: PgPool) {
    let delay = Duration::from_millis(300);
    let business_url = spawn_business_mock(delay, false).await;
    let analytics_url = spawn_analytics_mock(delay, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let start = Instant::now();
    let response = send(
        app,
        trusted_request("GET", "/api/v1/aggregate/summary", "S2024001", "student"),
    )
    .await;
    let elapsed = start.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["business"]["success"], true);
    assert_eq!(json["data"]["analytics"]["success"], true);

    assert!(
        elapsed < Duration::from_millis(550),
        "branches must fan out concurrently, took {elapsed:?}"
    );
}

/// A branch exceeding its timeout settles as a branch failure while the
/// other branch's data still comes back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_branch_timeout_is_a_branch_failure(pool: PgPool) {
    let business_url = spawn_business_mock(Duration::from_secs(5), false).await;
    let analytics_url = spawn_analytics_mock(FAST, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(1),
    );

    let start = Instant::now();
    let response = send(
        app,
        trusted_request("GET", "/api/v1/aggregate/summary", "S2024001", "student"),
    )
    .await;
    let elapsed = start.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["business"]["success"], false);
    assert_eq!(json["data"]["analytics"]["success"], true);

    // Bounded by the branch timeout, not the slow branch's latency.
    assert!(
        elapsed < Duration::from_millis(1800),
        "aggregate latency must be bounded by the branch timeout, took {elapsed:?}"
    );
}

/// The aggregate endpoint requires an identity.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_requires_identity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/aggregate/summary").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Single-branch passthrough
// ---------------------------------------------------------------------------

/// A passthrough call returns the upstream payload under the standard
/// envelope.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_business_passthrough_success(pool: PgPool) {
    let business_url = spawn_business_mock(FAST, false).await;
    let analytics_url = spawn_analytics_mock(FAST, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let response = send(
        app,
        trusted_request("GET", "/api/v1/business/courses?page=1&limit=10", "S2024001", "student"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["courses"], 5);
}

/// A failing upstream surfaces as a typed 502 on passthrough endpoints,
/// unlike the aggregate endpoint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_business_passthrough_failure_is_bad_gateway(pool: PgPool) {
    let business_url = spawn_business_mock(FAST, true).await;
    let analytics_url = spawn_analytics_mock(FAST, false).await;
    let app = common::build_test_app_with_upstreams(
        pool,
        business_url,
        analytics_url,
        Duration::from_secs(2),
    );

    let response = send(
        app,
        trusted_request("GET", "/api/v1/business/courses", "S2024001", "student"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Role gates
// ---------------------------------------------------------------------------

/// The analytics query endpoint is staff-only.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_analytics_query_forbidden_for_students(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/analytics/query")
        .header("content-type", "application/json")
        .header("x-user-id", "S2024001")
        .header("x-user-role", "student")
        .body(axum::body::Body::from("{}"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admin audit endpoints reject non-admin identities.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_audit_requires_admin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send(
        app.clone(),
        trusted_request(
            "GET",
            "/api/v1/admin/audit/logins?user_id=S2024001",
            "T2001",
            "teacher",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(
        app,
        trusted_request(
            "GET",
            "/api/v1/admin/audit/logins?user_id=S2024001",
            "A0001",
            "admin",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
