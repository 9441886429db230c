//! The session manager: login, logout, and validation.
//!
//! Owns the Session lifecycle exclusively. Sessions follow
//! `created -> active -> {expired | revoked}`; expiry is inferred from
//! `expires_at` at validation time, revocation is the stored `is_active`
//! flag, and both routes are checked on every validation.

use campus_core::audit::{actions, modules, FailureReason, LoginOutcome};
use campus_core::error::CoreError;
use campus_core::roles::UserStatus;
use campus_db::models::login_log::CreateLoginLog;
use campus_db::models::operation_log::CreateOperationLog;
use campus_db::models::session::{CreateSession, UserSession};
use campus_db::models::user::User;
use campus_db::repositories::{SessionRepo, UserRepo};
use campus_db::DbPool;
use chrono::Utc;

use crate::audit::AuditSink;
use crate::auth::password::verify_password;
use crate::middleware::client_meta::ClientMeta;

/// Generic message returned for every credential failure.
///
/// Deliberately identical for unknown ids, non-active accounts, and wrong
/// passwords; the specific reason goes only to the login log.
const GENERIC_CREDENTIALS_MSG: &str = "Invalid user id or password";

/// Owns session creation, validation, renewal, and revocation.
///
/// Constructed once in `main` and shared via `AppState`; all collaborators
/// are injected so the manager is testable with a bare pool and a
/// throwaway audit queue.
pub struct SessionManager {
    pool: DbPool,
    audit: AuditSink,
    ttl: chrono::Duration,
}

impl SessionManager {
    pub fn new(pool: DbPool, audit: AuditSink, ttl_hours: i64) -> Self {
        SessionManager {
            pool,
            audit,
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    /// Authenticate a user and open a fresh session.
    ///
    /// Every failure path appends a failed login log entry with its
    /// specific reason before returning; the caller only ever sees the
    /// generic credentials message (or a validation error for missing
    /// input).
    pub async fn login(
        &self,
        campus_id: &str,
        password: &str,
        meta: &ClientMeta,
    ) -> Result<(UserSession, User), CoreError> {
        if campus_id.is_empty() || password.is_empty() {
            self.log_failure(campus_id, meta, FailureReason::MissingCredentials);
            return Err(CoreError::Validation(
                "User id and password are required".into(),
            ));
        }

        let user = match UserRepo::find_by_campus_id(&self.pool, campus_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed during login");
                self.log_failure(campus_id, meta, FailureReason::SystemError);
                return Err(CoreError::Internal("Login failed".into()));
            }
        };

        // Unknown ids and non-active accounts are indistinguishable to the
        // caller. The original id is logged either way.
        let Some(user) = user else {
            self.log_failure(campus_id, meta, FailureReason::UserNotFound);
            return Err(CoreError::Unauthorized(GENERIC_CREDENTIALS_MSG.into()));
        };
        if UserStatus::parse(&user.status) != Some(UserStatus::Active) {
            self.log_failure(campus_id, meta, FailureReason::UserNotFound);
            return Err(CoreError::Unauthorized(GENERIC_CREDENTIALS_MSG.into()));
        }

        match verify_password(password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                self.log_failure(campus_id, meta, FailureReason::InvalidPassword);
                return Err(CoreError::Unauthorized(GENERIC_CREDENTIALS_MSG.into()));
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification failed during login");
                self.log_failure(campus_id, meta, FailureReason::SystemError);
                return Err(CoreError::Internal("Login failed".into()));
            }
        }

        let input = CreateSession {
            session_id: uuid::Uuid::new_v4().to_string(),
            user_id: user.campus_id.clone(),
            user_agent: meta.user_agent.clone(),
            ip_address: meta.ip_address.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        let session = match SessionRepo::create(&self.pool, &input).await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(error = %e, "Session creation failed during login");
                self.log_failure(campus_id, meta, FailureReason::SystemError);
                return Err(CoreError::Internal("Login failed".into()));
            }
        };

        if let Err(e) = UserRepo::record_login(&self.pool, &user.campus_id).await {
            // Non-fatal: the session exists, only the stamp is missing.
            tracing::warn!(error = %e, "Failed to stamp last login time");
        }

        self.audit.record_login(CreateLoginLog {
            user_id: user.campus_id.clone(),
            logout_time: None,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            outcome: LoginOutcome::Success.as_str().into(),
            failure_reason: None,
            duration_secs: None,
        });
        self.audit.record_operation(CreateOperationLog {
            user_id: user.campus_id.clone(),
            module: modules::AUTHENTICATION.into(),
            action: actions::LOGIN.into(),
            description: "User login".into(),
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            request_json: None,
            response_status: None,
        });

        tracing::info!(user_id = %user.campus_id, session_id = %session.session_id, "Login successful");
        Ok((session, user))
    }

    /// Close a session.
    ///
    /// Idempotent: a missing or already-revoked session is not an error
    /// and performs no further store mutation. Log entries are written
    /// only when this call actually revoked the session.
    pub async fn logout(
        &self,
        session_id: &str,
        user_id: &str,
        meta: &ClientMeta,
    ) -> Result<(), CoreError> {
        let session = SessionRepo::find(&self.pool, session_id, user_id)
            .await
            .map_err(|e| CoreError::Internal(format!("Session lookup failed: {e}")))?;

        let Some(session) = session else {
            return Ok(());
        };

        let revoked = SessionRepo::revoke(&self.pool, session_id)
            .await
            .map_err(|e| CoreError::Internal(format!("Session revocation failed: {e}")))?;
        if !revoked {
            return Ok(());
        }

        let now = Utc::now();
        let duration_secs = (now - session.created_at).num_seconds().max(0);
        self.audit.record_login(CreateLoginLog {
            user_id: user_id.into(),
            logout_time: Some(now),
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            outcome: LoginOutcome::Logout.as_str().into(),
            failure_reason: None,
            duration_secs: Some(duration_secs),
        });
        self.audit.record_operation(CreateOperationLog {
            user_id: user_id.into(),
            module: modules::AUTHENTICATION.into(),
            action: actions::LOGOUT.into(),
            description: "User logout".into(),
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            request_json: None,
            response_status: None,
        });

        tracing::info!(%user_id, %session_id, duration_secs, "Logout");
        Ok(())
    }

    /// Resolve a session to its current user record.
    ///
    /// Requires an active, unexpired session matching both ids, and an
    /// owner that is still `active` -- a user may have been deactivated
    /// after the session was issued. Refreshes the session's
    /// last-activity timestamp on success; the expiry never moves.
    pub async fn validate(&self, session_id: &str, user_id: &str) -> Result<User, CoreError> {
        let session = SessionRepo::find_valid(&self.pool, session_id, user_id)
            .await
            .map_err(|e| CoreError::Internal(format!("Session lookup failed: {e}")))?
            .ok_or_else(|| CoreError::Unauthorized("Session is invalid or expired".into()))?;

        if let Err(e) = SessionRepo::touch_activity(&self.pool, &session.session_id).await {
            // Non-fatal: validity is unaffected by a missed activity stamp.
            tracing::warn!(error = %e, "Failed to refresh session activity");
        }

        let user = UserRepo::find_by_campus_id(&self.pool, user_id)
            .await
            .map_err(|e| CoreError::Internal(format!("User lookup failed: {e}")))?
            .ok_or_else(|| CoreError::Unauthorized("User no longer exists".into()))?;

        if UserStatus::parse(&user.status) != Some(UserStatus::Active) {
            return Err(CoreError::Unauthorized("Account is not active".into()));
        }

        Ok(user)
    }

    fn log_failure(&self, campus_id: &str, meta: &ClientMeta, reason: FailureReason) {
        self.audit.record_login(CreateLoginLog {
            user_id: campus_id.into(),
            logout_time: None,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            outcome: LoginOutcome::Failed.as_str().into(),
            failure_reason: Some(reason.as_str().into()),
            duration_secs: None,
        });
    }
}
