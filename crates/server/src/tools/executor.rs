//! Tool executor: argument extraction, adapter-layer validation, and the
//! mapping of every outcome onto the result envelope.

use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use tradewind_core::{OrderId, ToolResult, UserId};

use crate::models::EmailSendRequest;
use crate::services::{
    CartService, EmailService, OrderService, ServiceError, ShippingService,
};

/// Executor for the commerce tools.
///
/// Borrows the domain services and translates tool-call arguments into
/// service calls. Every path ends in an envelope; nothing propagates as an
/// unhandled fault.
pub struct ToolExecutor<'a> {
    cart: &'a CartService,
    orders: &'a OrderService,
    shipping: &'a ShippingService,
    email: &'a EmailService,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(
        cart: &'a CartService,
        orders: &'a OrderService,
        shipping: &'a ShippingService,
        email: &'a EmailService,
    ) -> Self {
        Self {
            cart,
            orders,
            shipping,
            email,
        }
    }

    /// Execute a tool by name and return the JSON-serialized envelope.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(&self, name: &str, input: &serde_json::Value) -> String {
        let result = match name {
            "queryShoppingCart" => self.query_shopping_cart(input).await,
            "queryOrderStatus" => self.query_order_status(input).await,
            "queryShippingInfo" => self.query_shipping_info(input).await,
            "sendEmailNotification" => self.send_email_notification(input).await,
            _ => ToolResult::fail(format!("unknown tool: {name}")),
        };
        result.to_json()
    }

    async fn query_shopping_cart(&self, input: &serde_json::Value) -> ToolResult {
        let user_id = input["userId"].as_i64().unwrap_or(0);
        tracing::info!(user_id, "queryShoppingCart called");

        match self.cart.query_cart(user_id).await {
            Ok(items) if items.is_empty() => ToolResult::ok_with("cart is empty", json!([])),
            Ok(items) => {
                let count = items.len();
                ok_with_data(format!("query succeeded, {count} item(s) in cart"), &items)
            }
            Err(e) => failure_envelope("cart query failed", e),
        }
    }

    async fn query_order_status(&self, input: &serde_json::Value) -> ToolResult {
        let order_no = input["orderNo"].as_str().unwrap_or("");
        tracing::info!(order_no, "queryOrderStatus called");

        match self.orders.query_by_order_no(order_no).await {
            Ok(Some(detail)) => ok_with_data("order query succeeded", &detail),
            Ok(None) => ToolResult::fail(format!("order not found: {order_no}")),
            Err(e) => failure_envelope("order query failed", e),
        }
    }

    async fn query_shipping_info(&self, input: &serde_json::Value) -> ToolResult {
        let order_no = input["orderNo"].as_str().unwrap_or("");
        tracing::info!(order_no, "queryShippingInfo called");

        match self.shipping.query_by_order_no(order_no).await {
            Ok(Some(detail)) => ok_with_data("shipping query succeeded", &detail),
            Ok(None) => {
                ToolResult::fail(format!("no shipping information for order: {order_no}"))
            }
            Err(e) => failure_envelope("shipping query failed", e),
        }
    }

    async fn send_email_notification(&self, input: &serde_json::Value) -> ToolResult {
        let to_email = input["toEmail"].as_str().unwrap_or("");
        let email_type = input["emailType"].as_str();
        tracing::info!(to_email, email_type, "sendEmailNotification called");

        // Required-field checks happen here, before any dispatch attempt or
        // audit write: a rejected call leaves zero rows behind.
        if to_email.trim().is_empty() {
            return ToolResult::fail("recipient email must not be blank");
        }
        let subject = input["subject"].as_str().unwrap_or("");
        if subject.trim().is_empty() {
            return ToolResult::fail("email subject must not be blank");
        }
        let content = input["content"].as_str().unwrap_or("");
        if content.trim().is_empty() {
            return ToolResult::fail("email body must not be blank");
        }

        let request = EmailSendRequest {
            user_id: input["userId"].as_i64().map(UserId::new),
            to_email: to_email.to_string(),
            cc_email: input["ccEmail"]
                .as_str()
                .map(str::trim)
                .filter(|cc| !cc.is_empty())
                .map(String::from),
            subject: subject.to_string(),
            content: content.to_string(),
            email_type: email_type.map(String::from),
            related_order_id: input["relatedOrderId"].as_i64().map(OrderId::new),
        };

        match self.email.send(request).await {
            Ok(record) => ok_with_data("email sent successfully", &record),
            Err(e) => failure_envelope("email send failed", e),
        }
    }
}

/// Serialize a payload into the success envelope; a serializer error
/// degrades to a failure envelope instead of a fault.
fn ok_with_data<T: Serialize>(message: impl Into<String>, payload: &T) -> ToolResult {
    match serde_json::to_value(payload) {
        Ok(data) => ToolResult::ok_with(message, data),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize tool payload");
            ToolResult::fail(format!("failed to serialize result: {e}"))
        }
    }
}

/// Map a service error onto the failure envelope.
///
/// Validation messages pass through verbatim; dependency failures are
/// logged here (the only place that decides they are errors) and reported
/// with the operation context prefixed.
fn failure_envelope(context: &str, err: ServiceError) -> ToolResult {
    match err {
        ServiceError::InvalidArgument(message) => ToolResult::fail(message),
        ServiceError::MailDispatch(message) => {
            ToolResult::fail(format!("email send failed: {message}"))
        }
        ServiceError::Repository(e) => {
            tracing::error!(error = %e, context, "dependency failure");
            ToolResult::fail(format!("{context}: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RepositoryError;

    #[test]
    fn invalid_argument_message_passes_through() {
        let result = failure_envelope(
            "cart query failed",
            ServiceError::InvalidArgument("invalid user id".to_string()),
        );
        assert!(!result.success);
        assert_eq!(result.message, "invalid user id");
    }

    #[test]
    fn repository_failure_is_prefixed_with_context() {
        let err = ServiceError::Repository(RepositoryError::DataCorruption(
            "invalid order status value: TELEPORTED".to_string(),
        ));
        let result = failure_envelope("order query failed", err);
        assert!(!result.success);
        assert!(result.message.starts_with("order query failed: "));
    }

    #[test]
    fn dispatch_failure_carries_transport_text() {
        let result = failure_envelope(
            "email send failed",
            ServiceError::MailDispatch("connection refused".to_string()),
        );
        assert_eq!(result.message, "email send failed: connection refused");
    }
}
