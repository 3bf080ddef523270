//! Database operations for the email audit log.

use sqlx::PgPool;

use tradewind_core::EmailLogId;

use super::RepositoryError;
use crate::models::NewEmailLog;

/// Repository for email audit rows.
///
/// Rows are append-only: one insert per send attempt, never an update.
pub struct EmailLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EmailLogRepository<'a> {
    /// Create a new email log repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one audit row and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, log: &NewEmailLog) -> Result<EmailLogId, RepositoryError> {
        let id = sqlx::query_scalar::<_, EmailLogId>(
            r"
            INSERT INTO email_log
                (user_id, to_email, cc_email, subject, content, email_type,
                 related_order_id, status, sent_at, error_msg, retry_count,
                 created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now())
            RETURNING id
            ",
        )
        .bind(log.user_id)
        .bind(&log.to_email)
        .bind(&log.cc_email)
        .bind(&log.subject)
        .bind(&log.content)
        .bind(log.email_type.as_str())
        .bind(log.related_order_id)
        .bind(log.status.to_string())
        .bind(log.sent_at)
        .bind(&log.error_msg)
        .bind(log.retry_count)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
