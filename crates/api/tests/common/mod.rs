//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use campus_api::audit::AuditWriter;
use campus_api::auth::password::hash_password;
use campus_api::auth::SessionManager;
use campus_api::config::ServerConfig;
use campus_api::gateway::AggregationGateway;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_core::identity::{HEADER_USER_EMAIL, HEADER_USER_ID, HEADER_USER_NAME, HEADER_USER_ROLE};
use campus_db::models::user::{CreateUser, User};
use campus_db::repositories::UserRepo;
use campus_upstream::{AnalyticsClient, BusinessClient};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        session_ttl_hours: 24,
        session_cleanup_interval_secs: 3600,
        audit_queue_capacity: 64,
        business_rpc_url: "http://127.0.0.1:9/rpc".to_string(),
        analytics_base_url: "http://127.0.0.1:9".to_string(),
        upstream_timeout_secs: 2,
    }
}

/// Build the full application router against unreachable upstream
/// services. Suitable for every test that does not exercise the gateway.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_test_app_with_config(pool, config)
}

/// Build the full application router with explicit upstream URLs and
/// branch timeout, for gateway and passthrough tests.
pub fn build_test_app_with_upstreams(
    pool: PgPool,
    business_rpc_url: String,
    analytics_base_url: String,
    upstream_timeout: Duration,
) -> Router {
    let mut config = test_config();
    config.business_rpc_url = business_rpc_url;
    config.analytics_base_url = analytics_base_url;
    config.upstream_timeout_secs = upstream_timeout.as_secs().max(1);
    build_app_with_timeout(pool, config, upstream_timeout)
}

fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let timeout = Duration::from_secs(config.upstream_timeout_secs);
    build_app_with_timeout(pool, config, timeout)
}

fn build_app_with_timeout(pool: PgPool, config: ServerConfig, timeout: Duration) -> Router {
    let (audit, audit_rx) = AuditWriter::channel(config.audit_queue_capacity);
    tokio::spawn(AuditWriter::run(pool.clone(), audit_rx));

    let sessions = Arc::new(SessionManager::new(
        pool.clone(),
        audit.clone(),
        config.session_ttl_hours,
    ));
    let business = Arc::new(BusinessClient::new(config.business_rpc_url.clone(), timeout));
    let analytics = Arc::new(AnalyticsClient::new(config.analytics_base_url.clone(), timeout));
    let gateway = Arc::new(AggregationGateway::new(business, analytics, timeout));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sessions,
        gateway,
        audit,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// User fixtures
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row
/// plus the plaintext password used.
pub async fn create_test_user(pool: &PgPool, campus_id: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        campus_id: campus_id.to_string(),
        display_name: format!("Test {campus_id}"),
        email: format!("{campus_id}@campus.test"),
        password_hash: hashed,
        role: role.to_string(),
        status: "active".to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// POST a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET without credentials.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with a `Cookie` header.
pub async fn get_with_cookies(app: Router, path: &str, cookies: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header("cookie", cookies)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with a `Cookie` header and no body.
pub async fn post_with_cookies(app: Router, path: &str, cookies: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("cookie", cookies)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Build a request carrying the trusted identity headers the upstream
/// proxy would inject.
pub fn trusted_request(method: &str, path: &str, user_id: &str, role: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(HEADER_USER_ID, user_id)
        .header(HEADER_USER_ROLE, role)
        .header(HEADER_USER_NAME, format!("Test {user_id}"))
        .header(HEADER_USER_EMAIL, format!("{user_id}@campus.test"))
        .body(Body::empty())
        .unwrap()
}

/// Send a request built with [`trusted_request`].
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract all `Set-Cookie` pairs (name=value) from a response, joined
/// into a single `Cookie` header value.
pub fn extract_cookies(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// Async assertions
// ---------------------------------------------------------------------------

/// Poll `check` until it returns `true` or the deadline passes.
///
/// Audit writes are asynchronous with respect to the request path, so
/// tests asserting on log rows wait for the writer to drain.
pub async fn wait_for<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let deadline = std::time::Instant::now() + Duration::from_secs(3);
    loop {
        if check().await {
            return true;
        }
        if std::time::Instant::now() > deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}

// ---------------------------------------------------------------------------
// Mock upstream services
// ---------------------------------------------------------------------------

/// Serve a router on an ephemeral local port, returning its address.
pub async fn spawn_mock(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server error");
    });
    addr
}

/// Spawn a JSON-RPC business mock answering every call after `delay`.
///
/// Returns the RPC endpoint URL. When `fail` is set the mock answers
/// with HTTP 500 instead.
pub async fn spawn_business_mock(delay: Duration, fail: bool) -> String {
    let handler = move || async move {
        tokio::time::sleep(delay).await;
        if fail {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(axum::Json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "courses": 5, "credits": 18, "gpa": 3.7 }
        })))
    };
    let addr = spawn_mock(Router::new().route("/rpc", axum::routing::post(handler))).await;
    format!("http://{addr}/rpc")
}

/// Spawn an analytics mock answering the dashboard endpoint after
/// `delay`. Returns the base URL.
pub async fn spawn_analytics_mock(delay: Duration, fail: bool) -> String {
    let handler = move || async move {
        tokio::time::sleep(delay).await;
        if fail {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(axum::Json(serde_json::json!({
            "data": { "active_days": 12, "events": 230 }
        })))
    };
    let addr = spawn_mock(
        Router::new().route("/analytics/dashboard", axum::routing::get(handler)),
    )
    .await;
    format!("http://{addr}")
}
