//! Order domain service.

use sqlx::PgPool;

use super::ServiceError;
use crate::db::OrderRepository;
use crate::models::OrderDetailView;

/// Queries order details by external order number.
#[derive(Clone)]
pub struct OrderService {
    pool: PgPool,
}

impl OrderService {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve an order by its order number (e.g. `ORD202501001`), with
    /// buyer/seller names and snapshot item lines attached.
    ///
    /// Returns `Ok(None)` for an unknown order number.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidArgument` for a blank order number,
    /// or `ServiceError::Repository` if the store fails.
    pub async fn query_by_order_no(
        &self,
        order_no: &str,
    ) -> Result<Option<OrderDetailView>, ServiceError> {
        let order_no = order_no.trim();
        if order_no.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "order number must not be blank".to_string(),
            ));
        }

        let detail = OrderRepository::new(&self.pool)
            .select_order_detail(order_no)
            .await?;
        Ok(detail)
    }
}
