use std::sync::Arc;

use crate::audit::AuditSink;
use crate::auth::SessionManager;
use crate::config::ServerConfig;
use crate::gateway::AggregationGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Every collaborator is constructed in `main` and injected here; there are
/// no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session manager (login / logout / validate).
    pub sessions: Arc<SessionManager>,
    /// Aggregation gateway over the business and analytics backends.
    pub gateway: Arc<AggregationGateway>,
    /// Producer handle for the asynchronous audit queue.
    pub audit: AuditSink,
}
