//! Status enums for the commerce entities.
//!
//! These mirror the varchar status columns in the relational store. None of
//! them is ever transitioned by this system; tools only read and report
//! them. `EXCEPTION`, `HELD` and `REJECTED` are ordinary variants, not
//! terminal states.

use serde::{Deserialize, Serialize};

/// Error returned when a status column holds an unrecognized value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid {kind} value: {value}")]
pub struct ParseStatusError {
    /// Which enumeration failed to parse.
    pub kind: &'static str,
    /// The offending raw value.
    pub value: String,
}

impl ParseStatusError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Account role stored on `sys_user.user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

/// Order lifecycle stored on `order_info.order_status`.
///
/// `CANCELLED` and `REFUNDED` are reachable from the earlier states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Processing,
    Shipped,
    InTransit,
    CustomsClearance,
    Delivered,
    Completed,
    Cancelled,
    Refunded,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Paid => "PAID",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::InTransit => "IN_TRANSIT",
            Self::CustomsClearance => "CUSTOMS_CLEARANCE",
            Self::Delivered => "DELIVERED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_PAYMENT" => Ok(Self::PendingPayment),
            "PAID" => Ok(Self::Paid),
            "PROCESSING" => Ok(Self::Processing),
            "SHIPPED" => Ok(Self::Shipped),
            "IN_TRANSIT" => Ok(Self::InTransit),
            "CUSTOMS_CLEARANCE" => Ok(Self::CustomsClearance),
            "DELIVERED" => Ok(Self::Delivered),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            "REFUNDED" => Ok(Self::Refunded),
            _ => Err(ParseStatusError::new("order status", s)),
        }
    }
}

/// Payment state stored on `order_info.payment_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unpaid => "UNPAID",
            Self::Paid => "PAID",
            Self::Refunded => "REFUNDED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNPAID" => Ok(Self::Unpaid),
            "PAID" => Ok(Self::Paid),
            "REFUNDED" => Ok(Self::Refunded),
            _ => Err(ParseStatusError::new("payment status", s)),
        }
    }
}

/// Carrier-side progress stored on `shipping_info.shipping_status`.
///
/// `EXCEPTION` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingStatus {
    Pending,
    PickedUp,
    InTransit,
    ArrivedPort,
    CustomsClearance,
    OutForDelivery,
    Delivered,
    Exception,
}

impl std::fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::PickedUp => "PICKED_UP",
            Self::InTransit => "IN_TRANSIT",
            Self::ArrivedPort => "ARRIVED_PORT",
            Self::CustomsClearance => "CUSTOMS_CLEARANCE",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
            Self::Exception => "EXCEPTION",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ShippingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PICKED_UP" => Ok(Self::PickedUp),
            "IN_TRANSIT" => Ok(Self::InTransit),
            "ARRIVED_PORT" => Ok(Self::ArrivedPort),
            "CUSTOMS_CLEARANCE" => Ok(Self::CustomsClearance),
            "OUT_FOR_DELIVERY" => Ok(Self::OutForDelivery),
            "DELIVERED" => Ok(Self::Delivered),
            "EXCEPTION" => Ok(Self::Exception),
            _ => Err(ParseStatusError::new("shipping status", s)),
        }
    }
}

/// Customs progress stored on `shipping_info.customs_status`.
///
/// Tracked independently of [`ShippingStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomsStatus {
    NotStarted,
    DocumentsSubmitted,
    UnderReview,
    Cleared,
    Held,
    Rejected,
}

impl std::fmt::Display for CustomsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotStarted => "NOT_STARTED",
            Self::DocumentsSubmitted => "DOCUMENTS_SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Cleared => "CLEARED",
            Self::Held => "HELD",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for CustomsStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "DOCUMENTS_SUBMITTED" => Ok(Self::DocumentsSubmitted),
            "UNDER_REVIEW" => Ok(Self::UnderReview),
            "CLEARED" => Ok(Self::Cleared),
            "HELD" => Ok(Self::Held),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseStatusError::new("customs status", s)),
        }
    }
}

/// Outcome of one email send attempt, stored on `email_log.status`.
///
/// `PENDING` only exists in memory while an attempt is in flight; persisted
/// rows are always `SENT` or `FAILED`, and terminal once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    Pending,
    Sent,
    Failed,
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for EmailStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SENT" => Ok(Self::Sent),
            "FAILED" => Ok(Self::Failed),
            _ => Err(ParseStatusError::new("email status", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn order_status_round_trips() {
        for status in [
            OrderStatus::PendingPayment,
            OrderStatus::CustomsClearance,
            OrderStatus::Refunded,
        ] {
            assert_eq!(
                OrderStatus::from_str(&status.to_string()).expect("parse"),
                status
            );
        }
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(ShippingStatus::OutForDelivery.to_string(), "OUT_FOR_DELIVERY");
        assert_eq!(
            serde_json::to_string(&ShippingStatus::OutForDelivery).expect("serialize"),
            "\"OUT_FOR_DELIVERY\""
        );
        assert_eq!(CustomsStatus::DocumentsSubmitted.to_string(), "DOCUMENTS_SUBMITTED");
    }

    #[test]
    fn unknown_value_is_an_error() {
        let err = PaymentStatus::from_str("MAYBE").expect_err("must fail");
        assert_eq!(err.kind, "payment status");
        assert_eq!(err.value, "MAYBE");
        assert!(EmailStatus::from_str("sent").is_err(), "parsing is case-sensitive");
    }
}
