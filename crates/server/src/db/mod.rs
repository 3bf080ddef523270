//! Database operations against the commerce `PostgreSQL` schema.
//!
//! # Tables
//!
//! The schema is owned and migrated elsewhere; this crate depends on the
//! column shapes only:
//!
//! - `sys_user` - buyers, sellers, admins
//! - `product` / `product_category` - seller catalog
//! - `shopping_cart` - (user, product) cart entries
//! - `order_info` / `order_item` - orders and their snapshot lines
//! - `shipping_info` / `shipping_track` - shipping records and timelines
//! - `email_log` - one row per email send attempt
//!
//! All queries use the runtime `query_as` API with explicit row types; the
//! schema lives outside this repository, so there is no compile-time
//! database to check macros against.

pub mod cart;
pub mod email_log;
pub mod orders;
pub mod shipping;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::CartRepository;
pub use email_log::EmailLogRepository;
pub use orders::OrderRepository;
pub use shipping::ShippingRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
