//! Periodic purge of expired sessions (TTL semantics).
//!
//! Deletes `user_sessions` rows past their `expires_at`, regardless of the
//! active flag. Validation never returns an expired session, so the purge
//! interval affects only storage, not correctness.

use std::time::Duration;

use campus_db::repositories::SessionRepo;
use campus_db::DbPool;
use tokio_util::sync::CancellationToken;

/// Run the session expiry cleanup loop until `cancel` is triggered.
pub async fn run(pool: DbPool, interval_secs: u64, cancel: CancellationToken) {
    tracing::info!(interval_secs, "Session expiry job started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session expiry job stopping");
                break;
            }
            _ = interval.tick() => {
                match SessionRepo::delete_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session expiry: purged expired sessions");
                        } else {
                            tracing::debug!("Session expiry: nothing to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session expiry: purge failed");
                    }
                }
            }
        }
    }
}
