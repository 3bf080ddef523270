//! Email pipeline records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tradewind_core::{EmailCategory, EmailLogId, EmailStatus, OrderId, UserId};

/// Arguments for one send invocation, as received from the tool adapter.
///
/// The adapter has already checked that `to_email`, `subject` and `content`
/// are non-blank; everything else is optional.
#[derive(Debug, Clone)]
pub struct EmailSendRequest {
    /// Acting user, recorded on the audit row when present.
    pub user_id: Option<UserId>,
    pub to_email: String,
    pub cc_email: Option<String>,
    pub subject: String,
    /// Final rendered body (HTML allowed). Templates are an upstream concern.
    pub content: String,
    /// Raw caller-supplied category; resolved leniently by the service.
    pub email_type: Option<String>,
    pub related_order_id: Option<OrderId>,
}

/// Audit row for one send attempt, composed after the attempt resolves.
///
/// Exactly one of these is inserted per invocation, on success and on
/// failure alike; `status` is terminal at insert time and the row is never
/// updated afterwards. A retried send produces a new row.
#[derive(Debug, Clone)]
pub struct NewEmailLog {
    pub user_id: Option<UserId>,
    pub to_email: String,
    pub cc_email: Option<String>,
    pub subject: String,
    pub content: String,
    pub email_type: EmailCategory,
    pub related_order_id: Option<OrderId>,
    pub status: EmailStatus,
    /// Set only when `status` is `SENT`.
    pub sent_at: Option<DateTime<Utc>>,
    /// Set only when `status` is `FAILED`.
    pub error_msg: Option<String>,
    /// Always 0 here; incremented by an external retry mechanism.
    pub retry_count: i32,
}

/// What the send operation reports back to the caller.
///
/// `email_log_id` is `None` when the audit insert itself failed; the send
/// outcome is still authoritative in that case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAuditRecord {
    pub email_log_id: Option<EmailLogId>,
    pub to_email: String,
    pub email_type: EmailCategory,
    pub sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_record_serializes_camel_case() {
        let record = EmailAuditRecord {
            email_log_id: Some(EmailLogId::new(12)),
            to_email: "buyer@example.com".to_string(),
            email_type: EmailCategory::OrderConfirm,
            sent_at: None,
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["emailLogId"], serde_json::json!(12));
        assert_eq!(value["emailType"], serde_json::json!("ORDER_CONFIRM"));
        assert!(value["sentAt"].is_null());
    }
}
