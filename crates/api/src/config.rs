/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Session lifetime in hours. Fixed at login; never extended (default: `24`).
    pub session_ttl_hours: i64,
    /// How often the expired-session purge job runs, in seconds (default: `3600`).
    pub session_cleanup_interval_secs: u64,
    /// Capacity of the bounded audit write queue (default: `1024`).
    pub audit_queue_capacity: usize,
    /// JSON-RPC endpoint of the business backend.
    pub business_rpc_url: String,
    /// Base URL of the analytics backend.
    pub analytics_base_url: String,
    /// Per-branch timeout for upstream calls, in seconds (default: `5`).
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                          |
    /// |---------------------------------|----------------------------------|
    /// | `HOST`                          | `0.0.0.0`                        |
    /// | `PORT`                          | `3000`                           |
    /// | `CORS_ORIGINS`                  | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                             |
    /// | `SHUTDOWN_TIMEOUT_SECS`         | `30`                             |
    /// | `SESSION_TTL_HOURS`             | `24`                             |
    /// | `SESSION_CLEANUP_INTERVAL_SECS` | `3600`                           |
    /// | `AUDIT_QUEUE_CAPACITY`          | `1024`                           |
    /// | `BUSINESS_RPC_URL`              | `http://business-service:9090/rpc` |
    /// | `ANALYTICS_SERVICE_URL`         | `http://analytics-service:8001`  |
    /// | `UPSTREAM_TIMEOUT_SECS`         | `5`                              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let session_ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let session_cleanup_interval_secs: u64 = std::env::var("SESSION_CLEANUP_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SESSION_CLEANUP_INTERVAL_SECS must be a valid u64");

        let audit_queue_capacity: usize = std::env::var("AUDIT_QUEUE_CAPACITY")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("AUDIT_QUEUE_CAPACITY must be a valid usize");

        let business_rpc_url = std::env::var("BUSINESS_RPC_URL")
            .unwrap_or_else(|_| "http://business-service:9090/rpc".into());

        let analytics_base_url = std::env::var("ANALYTICS_SERVICE_URL")
            .unwrap_or_else(|_| "http://analytics-service:8001".into());

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            session_ttl_hours,
            session_cleanup_interval_secs,
            audit_queue_capacity,
            business_rpc_url,
            analytics_base_url,
            upstream_timeout_secs,
        }
    }
}
