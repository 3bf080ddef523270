//! Caller-facing view objects and email-pipeline records.
//!
//! Views are the shapes the aggregation queries produce; their wire format
//! (camelCase) is what agent callers already parse out of the envelope's
//! `data` field.

pub mod email;
pub mod views;

pub use email::{EmailAuditRecord, EmailSendRequest, NewEmailLog};
pub use views::{
    CartItemView, OrderDetailView, OrderItemView, ShippingDetailView, TrackEventView,
};
