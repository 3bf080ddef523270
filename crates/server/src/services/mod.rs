//! Domain services: input validation, aggregation queries, the email
//! pipeline.
//!
//! Services never construct envelopes and never log not-found outcomes as
//! errors; the tool adapters in [`crate::tools`] own the mapping from
//! `ServiceError` to caller-facing text.

pub mod cart;
pub mod email;
pub mod orders;
pub mod shipping;

use thiserror::Error;

use crate::db::RepositoryError;

pub use cart::CartService;
pub use email::{EmailService, Mailer, MailerError, SmtpMailer};
pub use orders::OrderService;
pub use shipping::ShippingService;

/// Domain-level error taxonomy.
///
/// Not-found is deliberately absent: services report it as `Ok(None)` (or
/// an empty vector) because it is an expected outcome, not a fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing required input, detected before any store or
    /// transport access.
    #[error("{0}")]
    InvalidArgument(String),

    /// The relational store failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The mail transport failed; carries the transport's error text.
    #[error("email send failed: {0}")]
    MailDispatch(String),
}
