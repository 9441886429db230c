use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_api::audit::AuditWriter;
use campus_api::auth::SessionManager;
use campus_api::background;
use campus_api::config::ServerConfig;
use campus_api::gateway::AggregationGateway;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_upstream::{AnalyticsClient, BusinessClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = campus_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    campus_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    campus_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Audit writer ---
    let (audit, audit_rx) = AuditWriter::channel(config.audit_queue_capacity);
    let audit_handle = tokio::spawn(AuditWriter::run(pool.clone(), audit_rx));
    tracing::info!(capacity = config.audit_queue_capacity, "Audit writer started");

    // --- Session manager ---
    let sessions = Arc::new(SessionManager::new(
        pool.clone(),
        audit.clone(),
        config.session_ttl_hours,
    ));

    // --- Upstream clients / aggregation gateway ---
    let upstream_timeout = Duration::from_secs(config.upstream_timeout_secs);
    let business = Arc::new(BusinessClient::new(
        config.business_rpc_url.clone(),
        upstream_timeout,
    ));
    let analytics = Arc::new(AnalyticsClient::new(
        config.analytics_base_url.clone(),
        upstream_timeout,
    ));
    let gateway = Arc::new(AggregationGateway::new(business, analytics, upstream_timeout));
    tracing::info!(
        business = %config.business_rpc_url,
        analytics = %config.analytics_base_url,
        "Upstream clients configured"
    );

    // --- Session expiry job ---
    let cleanup_cancel = tokio_util::sync::CancellationToken::new();
    let cleanup_handle = tokio::spawn(background::session_expiry::run(
        pool.clone(),
        config.session_cleanup_interval_secs,
        cleanup_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sessions,
        gateway,
        audit,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Stop the session expiry job.
    cleanup_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), cleanup_handle).await;
    tracing::info!("Session expiry job stopped");

    // The server (and its AppState clones) are gone; once the remaining
    // audit sink drops, the writer drains the queue and exits.
    let _ = tokio::time::timeout(
        Duration::from_secs(config.shutdown_timeout_secs),
        audit_handle,
    )
    .await;
    tracing::info!("Audit writer drained");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
