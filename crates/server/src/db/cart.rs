//! Database operations for the cart aggregation query.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use tradewind_core::{CartId, ProductId, UserId};

use super::RepositoryError;
use crate::models::CartItemView;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for the cart-with-product join.
#[derive(Debug, sqlx::FromRow)]
struct CartItemRow {
    cart_id: CartId,
    product_id: ProductId,
    product_name: String,
    product_name_en: Option<String>,
    sku: String,
    unit_price: Decimal,
    currency: String,
    quantity: i32,
    subtotal: Decimal,
    selected: i32,
    stock_quantity: i32,
    min_order_quantity: i32,
    origin_country: Option<String>,
    added_at: DateTime<Utc>,
}

impl From<CartItemRow> for CartItemView {
    fn from(row: CartItemRow) -> Self {
        Self {
            cart_id: row.cart_id,
            product_id: row.product_id,
            product_name: row.product_name,
            product_name_en: row.product_name_en,
            sku: row.sku,
            unit_price: row.unit_price,
            currency: row.currency,
            quantity: row.quantity,
            subtotal: row.subtotal,
            selected: row.selected != 0,
            stock_quantity: row.stock_quantity,
            min_order_quantity: row.min_order_quantity,
            origin_country: row.origin_country,
            added_at: row.added_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for cart read operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all cart entries for a user joined with live product state.
    ///
    /// Prices and subtotals reflect the product's current price; the cart
    /// has no snapshot semantics. Returns an empty vector for an empty
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn select_cart_with_product(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartItemView>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r"
            SELECT sc.id              AS cart_id,
                   sc.product_id      AS product_id,
                   p.name_zh          AS product_name,
                   p.name_en          AS product_name_en,
                   p.sku              AS sku,
                   p.price            AS unit_price,
                   p.currency         AS currency,
                   sc.quantity        AS quantity,
                   p.price * sc.quantity AS subtotal,
                   sc.selected        AS selected,
                   p.stock_quantity   AS stock_quantity,
                   p.min_order_quantity AS min_order_quantity,
                   p.origin_country   AS origin_country,
                   sc.created_at      AS added_at
            FROM shopping_cart sc
            JOIN product p ON p.id = sc.product_id
            WHERE sc.user_id = $1
            ORDER BY sc.created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartItemView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_flag_converts_to_bool() {
        let row = CartItemRow {
            cart_id: CartId::new(1),
            product_id: ProductId::new(2),
            product_name: "蓝牙耳机".to_string(),
            product_name_en: Some("Bluetooth Earbuds".to_string()),
            sku: "SKU-001".to_string(),
            unit_price: Decimal::new(299_99, 2),
            currency: "USD".to_string(),
            quantity: 3,
            subtotal: Decimal::new(899_97, 2),
            selected: 1,
            stock_quantity: 500,
            min_order_quantity: 1,
            origin_country: Some("CN".to_string()),
            added_at: Utc::now(),
        };

        let view = CartItemView::from(row);
        assert!(view.selected);
        assert_eq!(view.subtotal, Decimal::new(899_97, 2));
    }
}
