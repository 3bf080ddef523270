//! Database operations for the order aggregation query.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use tradewind_core::{OrderId, OrderStatus, PaymentStatus, ProductId};

use super::RepositoryError;
use crate::models::{OrderDetailView, OrderItemView};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for the order header join.
#[derive(Debug, sqlx::FromRow)]
struct OrderHeaderRow {
    order_id: OrderId,
    order_no: String,
    buyer_name: String,
    seller_name: String,
    total_amount: Decimal,
    shipping_fee: Decimal,
    tax_amount: Decimal,
    currency: String,
    order_status: String,
    payment_status: String,
    payment_method: Option<String>,
    paid_at: Option<DateTime<Utc>>,
    shipping_method: Option<String>,
    shipping_address: Option<String>,
    buyer_remark: Option<String>,
    created_at: DateTime<Utc>,
}

impl OrderHeaderRow {
    fn into_view(self, items: Vec<OrderItemView>) -> Result<OrderDetailView, RepositoryError> {
        let order_status = OrderStatus::from_str(&self.order_status)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        let payment_status = PaymentStatus::from_str(&self.payment_status)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        Ok(OrderDetailView {
            order_id: self.order_id,
            order_no: self.order_no,
            buyer_name: self.buyer_name,
            seller_name: self.seller_name,
            total_amount: self.total_amount,
            shipping_fee: self.shipping_fee,
            tax_amount: self.tax_amount,
            currency: self.currency,
            order_status,
            payment_status,
            payment_method: self.payment_method,
            paid_at: self.paid_at,
            shipping_method: self.shipping_method,
            shipping_address: self.shipping_address,
            buyer_remark: self.buyer_remark,
            created_at: self.created_at,
            items,
        })
    }
}

/// Internal row type for order item lines.
///
/// These columns are snapshots taken at order time and are returned exactly
/// as stored; subtotals are never recomputed from the live product.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    product_id: ProductId,
    product_name: String,
    product_sku: String,
    unit_price: Decimal,
    quantity: i32,
    subtotal: Decimal,
}

impl From<OrderItemRow> for OrderItemView {
    fn from(row: OrderItemRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            product_sku: row.product_sku,
            unit_price: row.unit_price,
            quantity: row.quantity,
            subtotal: row.subtotal,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order read operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve an order by its external order number and attach buyer/seller
    /// names and all snapshot item lines.
    ///
    /// Returns `None` when no order matches; an unknown order number is a
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::DataCorruption` if a status column holds an
    /// unrecognized value.
    pub async fn select_order_detail(
        &self,
        order_no: &str,
    ) -> Result<Option<OrderDetailView>, RepositoryError> {
        let header = sqlx::query_as::<_, OrderHeaderRow>(
            r"
            SELECT o.id               AS order_id,
                   o.order_no         AS order_no,
                   b.username         AS buyer_name,
                   s.username         AS seller_name,
                   o.total_amount     AS total_amount,
                   o.shipping_fee     AS shipping_fee,
                   o.tax_amount       AS tax_amount,
                   o.currency         AS currency,
                   o.order_status     AS order_status,
                   o.payment_status   AS payment_status,
                   o.payment_method   AS payment_method,
                   o.paid_at          AS paid_at,
                   o.shipping_method  AS shipping_method,
                   o.shipping_address AS shipping_address,
                   o.buyer_remark     AS buyer_remark,
                   o.created_at       AS created_at
            FROM order_info o
            JOIN sys_user b ON b.id = o.buyer_id
            JOIN sys_user s ON s.id = o.seller_id
            WHERE o.order_no = $1
            ",
        )
        .bind(order_no)
        .fetch_optional(self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT product_id, product_name, product_sku,
                   unit_price, quantity, subtotal
            FROM order_item
            WHERE order_id = $1
            ORDER BY id
            ",
        )
        .bind(header.order_id)
        .fetch_all(self.pool)
        .await?;

        let items = items.into_iter().map(OrderItemView::from).collect();
        header.into_view(items).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(order_status: &str, payment_status: &str) -> OrderHeaderRow {
        OrderHeaderRow {
            order_id: OrderId::new(10),
            order_no: "ORD202501001".to_string(),
            buyer_name: "acme_buyer".to_string(),
            seller_name: "shenzhen_tech".to_string(),
            total_amount: Decimal::new(3_149_89, 2),
            shipping_fee: Decimal::new(80_00, 2),
            tax_amount: Decimal::new(20_00, 2),
            currency: "USD".to_string(),
            order_status: order_status.to_string(),
            payment_status: payment_status.to_string(),
            payment_method: Some("WIRE_TRANSFER".to_string()),
            paid_at: Some(Utc::now()),
            shipping_method: Some("SEA".to_string()),
            shipping_address: Some("1 Harbor Way, Long Beach, CA".to_string()),
            buyer_remark: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn header_row_parses_status_columns() {
        let view = header("IN_TRANSIT", "PAID")
            .into_view(Vec::new())
            .expect("valid statuses");
        assert_eq!(view.order_status, OrderStatus::InTransit);
        assert_eq!(view.payment_status, PaymentStatus::Paid);
        assert!(view.items.is_empty());
    }

    #[test]
    fn unknown_status_is_data_corruption() {
        let err = header("TELEPORTED", "PAID")
            .into_view(Vec::new())
            .expect_err("must fail");
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn item_rows_keep_stored_snapshot_values() {
        let row = OrderItemRow {
            product_id: ProductId::new(7),
            product_name: "Wireless Mouse".to_string(),
            product_sku: "SKU-MOUSE".to_string(),
            unit_price: Decimal::new(299_99, 2),
            quantity: 10,
            // Stored snapshot, deliberately not unit_price * quantity of
            // any live product
            subtotal: Decimal::new(2_999_90, 2),
        };
        let view = OrderItemView::from(row);
        assert_eq!(view.subtotal, Decimal::new(2_999_90, 2));
        assert_eq!(view.unit_price * Decimal::from(view.quantity), view.subtotal);
    }
}
