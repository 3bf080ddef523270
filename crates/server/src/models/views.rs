//! View objects assembled by the aggregation queries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use tradewind_core::{
    CartId, CustomsStatus, OrderId, OrderStatus, PaymentStatus, ProductId, ShippingId,
    ShippingStatus,
};

/// One cart line joined with the current product state.
///
/// Cart lines have no snapshot semantics: `unit_price` and `subtotal`
/// reflect the product's price at query time, unlike order items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_name_en: Option<String>,
    pub sku: String,
    /// Current product price, not a snapshot.
    pub unit_price: Decimal,
    pub currency: String,
    pub quantity: i32,
    /// Current price times quantity, computed at query time.
    pub subtotal: Decimal,
    pub selected: bool,
    pub stock_quantity: i32,
    pub min_order_quantity: i32,
    pub origin_country: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// One order line, exactly as snapshotted at order time.
///
/// `unit_price`, `product_name`, `product_sku` and `subtotal` are copies
/// made when the order was placed and are never recomputed from the live
/// product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

/// Order header joined with buyer/seller names plus all item lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailView {
    pub order_id: OrderId,
    pub order_no: String,
    pub buyer_name: String,
    pub seller_name: String,
    pub total_amount: Decimal,
    pub shipping_fee: Decimal,
    pub tax_amount: Decimal,
    pub currency: String,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub shipping_method: Option<String>,
    pub shipping_address: Option<String>,
    pub buyer_remark: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

/// One timestamped point on the shipping timeline. Append-only upstream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventView {
    pub track_time: DateTime<Utc>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Shipping record for an order plus its track events, earliest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetailView {
    pub shipping_id: ShippingId,
    pub order_no: String,
    pub tracking_no: Option<String>,
    pub carrier: Option<String>,
    pub shipping_method: Option<String>,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub estimated_departure: Option<NaiveDate>,
    pub actual_departure: Option<NaiveDate>,
    pub estimated_arrival: Option<NaiveDate>,
    pub actual_arrival: Option<NaiveDate>,
    pub customs_status: CustomsStatus,
    pub shipping_status: ShippingStatus,
    pub package_info: Option<String>,
    pub tracks: Vec<TrackEventView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, unit_cents: i64, quantity: i32) -> OrderItemView {
        let unit_price = Decimal::new(unit_cents, 2);
        OrderItemView {
            product_id: ProductId::new(1),
            product_name: name.to_string(),
            product_sku: format!("SKU-{name}"),
            unit_price,
            quantity,
            subtotal: unit_price * Decimal::from(quantity),
        }
    }

    #[test]
    fn snapshot_subtotals_sum_exactly() {
        // 299.99 x 10 + 49.99 x 1 = 3049.89, no float drift
        let items = vec![item("widget", 299_99, 10), item("gadget", 49_99, 1)];
        let sum: Decimal = items.iter().map(|i| i.subtotal).sum();
        assert_eq!(sum, Decimal::new(3_049_89, 2));
    }

    #[test]
    fn views_serialize_camel_case() {
        let view = item("widget", 299_99, 10);
        let value = serde_json::to_value(&view).expect("serialize");
        let object = value.as_object().expect("object");
        assert!(object.contains_key("productSku"));
        assert!(object.contains_key("unitPrice"));
        assert!(!object.contains_key("product_sku"));
    }
}
