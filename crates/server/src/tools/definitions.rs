//! The tool registry: names, descriptions, and input schemas.

use serde_json::json;

use super::Tool;

/// All tools, in the order they are documented to callers.
#[must_use]
pub fn all_tools() -> Vec<Tool> {
    vec![
        query_shopping_cart(),
        query_order_status(),
        query_shipping_info(),
        send_email_notification(),
    ]
}

fn query_shopping_cart() -> Tool {
    Tool {
        name: "queryShoppingCart".to_string(),
        description: "Query a user's shopping cart. Returns every cart line with product \
                      name (both locales), SKU, current unit price, quantity, line subtotal, \
                      stock, minimum order quantity and origin country. Use when the user asks \
                      what is in their cart or wants to confirm items before ordering."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "userId": {
                    "type": "integer",
                    "description": "ID of the user whose cart to query"
                }
            },
            "required": ["userId"]
        }),
        has_side_effects: false,
    }
}

fn query_order_status() -> Tool {
    Tool {
        name: "queryOrderStatus".to_string(),
        description: "Look up an order by its order number (e.g. ORD202501001). Returns order \
                      and payment status, buyer/seller names, item lines with snapshot prices, \
                      amounts, shipping fee and tax. Use when the user asks about order \
                      progress, contents or amounts."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "orderNo": {
                    "type": "string",
                    "description": "Order number, e.g. ORD202501001"
                }
            },
            "required": ["orderNo"]
        }),
        has_side_effects: false,
    }
}

fn query_shipping_info() -> Tool {
    Tool {
        name: "queryShippingInfo".to_string(),
        description: "Look up shipping information for an order: tracking number, carrier, \
                      method, origin/destination ports, planned and actual departure/arrival \
                      dates, customs status, shipping status and the full chronological track \
                      timeline. Use when the user asks where a package is, when it will \
                      arrive, or how customs clearance is going."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "orderNo": {
                    "type": "string",
                    "description": "Order number used to resolve the shipping record"
                }
            },
            "required": ["orderNo"]
        }),
        has_side_effects: false,
    }
}

fn send_email_notification() -> Tool {
    Tool {
        name: "sendEmailNotification".to_string(),
        description: "Send an email notification. Categories: shipping delay (SHIPPING_DELAY), \
                      late shipment (LATE_SHIPMENT), order confirmation (ORDER_CONFIRM), \
                      payment reminder (PAYMENT_REMIND), customs alert (CUSTOMS_ALERT) and \
                      general (GENERAL). Every send attempt is recorded in the email audit \
                      log."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "toEmail": {
                    "type": "string",
                    "description": "Recipient email address (required)"
                },
                "subject": {
                    "type": "string",
                    "description": "Email subject (required)"
                },
                "content": {
                    "type": "string",
                    "description": "Email body, HTML allowed (required)"
                },
                "emailType": {
                    "type": "string",
                    "description": "SHIPPING_DELAY/LATE_SHIPMENT/ORDER_CONFIRM/PAYMENT_REMIND/CUSTOMS_ALERT/GENERAL; defaults to GENERAL"
                },
                "relatedOrderId": {
                    "type": "integer",
                    "description": "Related order ID, recorded on the audit row (optional)"
                },
                "ccEmail": {
                    "type": "string",
                    "description": "CC address (optional)"
                },
                "userId": {
                    "type": "integer",
                    "description": "Acting user ID, recorded on the audit row (optional)"
                }
            },
            "required": ["toEmail", "subject", "content"]
        }),
        has_side_effects: true,
    }
}
