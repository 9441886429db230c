//! Asynchronous audit logging.
//!
//! Handlers and the session manager never write audit rows inline;
//! they push entries into a bounded queue drained by [`AuditWriter`],
//! keeping audit I/O off the request path. A failed write is logged and
//! swallowed -- it must never abort the primary user-facing operation.

use campus_db::models::login_log::CreateLoginLog;
use campus_db::models::operation_log::CreateOperationLog;
use campus_db::repositories::{LoginLogRepo, OperationLogRepo};
use campus_db::DbPool;
use tokio::sync::mpsc;

/// One queued audit write.
#[derive(Debug)]
pub enum AuditEntry {
    Login(CreateLoginLog),
    Operation(CreateOperationLog),
}

/// Cheaply cloneable producer handle for the audit queue.
#[derive(Clone)]
pub struct AuditSink {
    tx: mpsc::Sender<AuditEntry>,
}

impl AuditSink {
    /// Queue a login log entry.
    pub fn record_login(&self, entry: CreateLoginLog) {
        self.push(AuditEntry::Login(entry));
    }

    /// Queue an operation log entry.
    pub fn record_operation(&self, entry: CreateOperationLog) {
        self.push(AuditEntry::Operation(entry));
    }

    /// Non-blocking enqueue. When the queue is full or the writer is gone
    /// the entry is dropped with a warning; the caller's operation
    /// proceeds regardless.
    fn push(&self, entry: AuditEntry) {
        if let Err(e) = self.tx.try_send(entry) {
            tracing::warn!(error = %e, "Audit queue unavailable, dropping entry");
        }
    }
}

/// Background service that drains the audit queue into the database.
pub struct AuditWriter;

impl AuditWriter {
    /// Create the bounded queue, returning the producer handle and the
    /// receiver to pass to [`run`](Self::run).
    pub fn channel(capacity: usize) -> (AuditSink, mpsc::Receiver<AuditEntry>) {
        let (tx, rx) = mpsc::channel(capacity);
        (AuditSink { tx }, rx)
    }

    /// Run the drain loop.
    ///
    /// Exits when every [`AuditSink`] clone has been dropped, which makes
    /// shutdown ordering simple: drop the state, then await this task to
    /// flush whatever is still queued.
    pub async fn run(pool: DbPool, mut rx: mpsc::Receiver<AuditEntry>) {
        while let Some(entry) = rx.recv().await {
            let result = match &entry {
                AuditEntry::Login(input) => LoginLogRepo::insert(&pool, input).await.map(|_| ()),
                AuditEntry::Operation(input) => {
                    OperationLogRepo::insert(&pool, input).await.map(|_| ())
                }
            };
            if let Err(e) = result {
                tracing::error!(error = %e, ?entry, "Failed to write audit entry");
            }
        }
        tracing::info!("Audit queue closed, writer shutting down");
    }
}

#[cfg(test)]
mod tests {
    use campus_core::audit::{actions, modules, LoginOutcome};

    use super::*;

    fn login_entry() -> CreateLoginLog {
        CreateLoginLog {
            user_id: "S2024001".into(),
            logout_time: None,
            ip_address: None,
            user_agent: None,
            outcome: LoginOutcome::Success.as_str().into(),
            failure_reason: None,
            duration_secs: None,
        }
    }

    #[tokio::test]
    async fn sink_enqueues_entries() {
        let (sink, mut rx) = AuditWriter::channel(4);
        sink.record_login(login_entry());
        sink.record_operation(CreateOperationLog {
            user_id: "S2024001".into(),
            module: modules::AUTHENTICATION.into(),
            action: actions::LOGIN.into(),
            description: "User login".into(),
            ip_address: None,
            user_agent: None,
            request_json: None,
            response_status: None,
        });

        assert!(matches!(rx.recv().await, Some(AuditEntry::Login(_))));
        assert!(matches!(rx.recv().await, Some(AuditEntry::Operation(_))));
    }

    #[tokio::test]
    async fn full_queue_drops_instead_of_blocking() {
        let (sink, mut rx) = AuditWriter::channel(1);
        sink.record_login(login_entry());
        // Queue is full; this must not block or panic.
        sink.record_login(login_entry());

        assert!(matches!(rx.recv().await, Some(AuditEntry::Login(_))));
        assert!(rx.try_recv().is_err(), "second entry should have been dropped");
    }

    #[tokio::test]
    async fn sink_survives_a_dropped_receiver() {
        let (sink, rx) = AuditWriter::channel(1);
        drop(rx);
        // Must not panic even though the writer is gone.
        sink.record_login(login_entry());
    }
}
