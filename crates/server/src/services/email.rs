//! Email notification service.
//!
//! The one side-effecting tool path. Every send invocation produces exactly
//! one audit row in `email_log`, on success and on failure alike. The send
//! outcome is authoritative and always returned to the caller; the audit
//! insert is a separate, optionally-failing side effect - an insert failure
//! is logged and swallowed, never surfaced.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use thiserror::Error;

use tradewind_core::{EmailCategory, EmailStatus};

use super::ServiceError;
use crate::config::MailConfig;
use crate::db::EmailLogRepository;
use crate::models::{EmailAuditRecord, EmailSendRequest, NewEmailLog};

/// Errors that can occur inside a mail transport.
#[derive(Debug, Error)]
pub enum MailerError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
}

/// Outbound mail transport.
///
/// An opaque collaborator: the service only cares whether the attempt
/// succeeded. Tests substitute a recording mock.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt to deliver one message. `body` may contain HTML.
    async fn send_mail(
        &self,
        to: &str,
        cc: Option<&str>,
        subject: &str,
        body: &str,
    ) -> Result<(), MailerError>;
}

/// SMTP transport via lettre.
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Create an SMTP mailer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay parameters are invalid.
    pub fn new(config: &MailConfig) -> Result<Self, MailerError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(
        &self,
        to: &str,
        cc: Option<&str>,
        subject: &str,
        body: &str,
    ) -> Result<(), MailerError> {
        let mut builder = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| MailerError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| MailerError::InvalidAddress(to.to_string()))?)
            .subject(subject);

        if let Some(cc) = cc {
            builder = builder.cc(cc
                .trim()
                .parse()
                .map_err(|_| MailerError::InvalidAddress(cc.to_string()))?);
        }

        let email = builder
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())?;

        self.mailer.send(email).await?;
        Ok(())
    }
}

/// Sends notifications and keeps the audit trail.
#[derive(Clone)]
pub struct EmailService {
    pool: PgPool,
    mailer: Arc<dyn Mailer>,
}

impl EmailService {
    /// Create a new email service.
    #[must_use]
    pub fn new(pool: PgPool, mailer: Arc<dyn Mailer>) -> Self {
        Self { pool, mailer }
    }

    /// Dispatch one notification and record the attempt.
    ///
    /// The caller-supplied category resolves leniently (unrecognized values
    /// degrade to `GENERAL`); the resolved category is recorded on the
    /// audit row and returned, so the fallback stays visible. Two
    /// invocations with identical arguments each produce their own audit
    /// row - no deduplication.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MailDispatch` when the transport fails; the
    /// FAILED audit row has already been written (best-effort) by then.
    pub async fn send(&self, request: EmailSendRequest) -> Result<EmailAuditRecord, ServiceError> {
        let category = resolve_category(request.email_type.as_deref());
        let to = request.to_email.trim().to_string();

        let dispatch = self
            .mailer
            .send_mail(
                &to,
                request.cc_email.as_deref(),
                &request.subject,
                &request.content,
            )
            .await;

        match dispatch {
            Ok(()) => {
                let sent_at = Utc::now();
                let row = build_audit_row(
                    &request,
                    category,
                    EmailStatus::Sent,
                    Some(sent_at),
                    None,
                );
                let email_log_id = self.persist_audit(&row).await;
                tracing::info!(to = %to, category = %category, "email sent");
                Ok(EmailAuditRecord {
                    email_log_id,
                    to_email: to,
                    email_type: category,
                    sent_at: Some(sent_at),
                })
            }
            Err(e) => {
                let error_text = e.to_string();
                tracing::error!(to = %to, error = %error_text, "email send failed");
                let row = build_audit_row(
                    &request,
                    category,
                    EmailStatus::Failed,
                    None,
                    Some(error_text.clone()),
                );
                self.persist_audit(&row).await;
                Err(ServiceError::MailDispatch(error_text))
            }
        }
    }

    /// Best-effort audit insert: a failure here is logged and swallowed so
    /// the caller's visibility into the dispatch outcome is never blocked
    /// by an audit-storage problem.
    async fn persist_audit(&self, row: &NewEmailLog) -> Option<tradewind_core::EmailLogId> {
        match EmailLogRepository::new(&self.pool).insert(row).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!(error = %e, "failed to persist email audit row");
                None
            }
        }
    }
}

/// Resolve the caller-supplied category, logging degraded matches.
fn resolve_category(raw: Option<&str>) -> EmailCategory {
    if let Some(raw) = raw {
        if !raw.trim().is_empty() && !EmailCategory::is_recognized(raw) {
            tracing::warn!(raw = %raw, "unrecognized email type, falling back to GENERAL");
        }
    }
    EmailCategory::resolve(raw)
}

/// Compose the audit row for a resolved attempt. Status is terminal at
/// insert time; `retry_count` always starts at 0 and is managed by an
/// external retry mechanism, never by this service.
fn build_audit_row(
    request: &EmailSendRequest,
    category: EmailCategory,
    status: EmailStatus,
    sent_at: Option<chrono::DateTime<Utc>>,
    error_msg: Option<String>,
) -> NewEmailLog {
    NewEmailLog {
        user_id: request.user_id,
        to_email: request.to_email.trim().to_string(),
        cc_email: request.cc_email.clone(),
        subject: request.subject.clone(),
        content: request.content.clone(),
        email_type: category,
        related_order_id: request.related_order_id,
        status,
        sent_at,
        error_msg,
        retry_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use tradewind_core::{OrderId, UserId};

    use super::*;

    fn request() -> EmailSendRequest {
        EmailSendRequest {
            user_id: Some(UserId::new(5)),
            to_email: "  buyer@example.com  ".to_string(),
            cc_email: Some("ops@example.com".to_string()),
            subject: "Your order has shipped".to_string(),
            content: "<p>On the way.</p>".to_string(),
            email_type: Some("order_confirm".to_string()),
            related_order_id: Some(OrderId::new(10)),
        }
    }

    #[test]
    fn sent_audit_row_shape() {
        let now = Utc::now();
        let row = build_audit_row(
            &request(),
            EmailCategory::OrderConfirm,
            EmailStatus::Sent,
            Some(now),
            None,
        );
        assert_eq!(row.status, EmailStatus::Sent);
        assert_eq!(row.sent_at, Some(now));
        assert!(row.error_msg.is_none());
        assert_eq!(row.retry_count, 0);
        assert_eq!(row.to_email, "buyer@example.com");
        assert_eq!(row.email_type, EmailCategory::OrderConfirm);
    }

    #[test]
    fn failed_audit_row_shape() {
        let row = build_audit_row(
            &request(),
            EmailCategory::General,
            EmailStatus::Failed,
            None,
            Some("connection refused".to_string()),
        );
        assert_eq!(row.status, EmailStatus::Failed);
        assert!(row.sent_at.is_none());
        assert_eq!(row.error_msg.as_deref(), Some("connection refused"));
        assert_eq!(row.retry_count, 0);
    }

    #[test]
    fn category_resolution_is_lenient() {
        assert_eq!(
            resolve_category(Some("customs_alert")),
            EmailCategory::CustomsAlert
        );
        assert_eq!(resolve_category(Some("FLASH_SALE")), EmailCategory::General);
        assert_eq!(resolve_category(None), EmailCategory::General);
    }
}
