//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::{CartService, EmailService, Mailer, OrderService, ShippingService};

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    cart: CartService,
    orders: OrderService,
    shipping: ShippingService,
    email: EmailService,
}

impl AppState {
    /// Build the state from configuration, a connection pool, and a mail
    /// transport.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool, mailer: Arc<dyn Mailer>) -> Self {
        let cart = CartService::new(pool.clone());
        let orders = OrderService::new(pool.clone());
        let shipping = ShippingService::new(pool.clone());
        let email = EmailService::new(pool.clone(), mailer);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                cart,
                orders,
                shipping,
                email,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    #[must_use]
    pub fn shipping(&self) -> &ShippingService {
        &self.inner.shipping
    }

    #[must_use]
    pub fn email(&self) -> &EmailService {
        &self.inner.email
    }
}
