//! Cart domain service.

use sqlx::PgPool;

use tradewind_core::UserId;

use super::ServiceError;
use crate::db::CartRepository;
use crate::models::CartItemView;

/// Queries cart contents joined with live product state.
#[derive(Clone)]
pub struct CartService {
    pool: PgPool,
}

impl CartService {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all cart entries for a user.
    ///
    /// An empty cart is a normal outcome and returns an empty vector.
    /// Validation happens before any store access.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidArgument` for a non-positive user id,
    /// or `ServiceError::Repository` if the store fails.
    pub async fn query_cart(&self, user_id: i64) -> Result<Vec<CartItemView>, ServiceError> {
        if user_id <= 0 {
            return Err(ServiceError::InvalidArgument("invalid user id".to_string()));
        }

        let items = CartRepository::new(&self.pool)
            .select_cart_with_product(UserId::new(user_id))
            .await?;
        Ok(items)
    }
}
