//! Shipping domain service.

use sqlx::PgPool;

use super::ServiceError;
use crate::db::ShippingRepository;
use crate::models::ShippingDetailView;

/// Queries shipping records and their track timelines by order number.
#[derive(Clone)]
pub struct ShippingService {
    pool: PgPool,
}

impl ShippingService {
    /// Create a new shipping service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the shipping record for an order, with track events ordered
    /// earliest first.
    ///
    /// Returns `Ok(None)` when the order has no shipping record yet (or the
    /// order number is unknown - order existence is not checked
    /// separately).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidArgument` for a blank order number,
    /// or `ServiceError::Repository` if the store fails.
    pub async fn query_by_order_no(
        &self,
        order_no: &str,
    ) -> Result<Option<ShippingDetailView>, ServiceError> {
        let order_no = order_no.trim();
        if order_no.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "order number must not be blank".to_string(),
            ));
        }

        let detail = ShippingRepository::new(&self.pool)
            .select_shipping_detail(order_no)
            .await?;
        Ok(detail)
    }
}
