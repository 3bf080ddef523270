//! Database operations for the shipping aggregation query.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use tradewind_core::{CustomsStatus, ShippingId, ShippingStatus};

use super::RepositoryError;
use crate::models::{ShippingDetailView, TrackEventView};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for the shipping-record join.
#[derive(Debug, sqlx::FromRow)]
struct ShippingRow {
    shipping_id: ShippingId,
    order_no: String,
    tracking_no: Option<String>,
    carrier: Option<String>,
    shipping_method: Option<String>,
    origin_port: Option<String>,
    destination_port: Option<String>,
    estimated_departure: Option<NaiveDate>,
    actual_departure: Option<NaiveDate>,
    estimated_arrival: Option<NaiveDate>,
    actual_arrival: Option<NaiveDate>,
    customs_status: String,
    shipping_status: String,
    package_info: Option<String>,
}

impl ShippingRow {
    fn into_view(self, tracks: Vec<TrackEventView>) -> Result<ShippingDetailView, RepositoryError> {
        let customs_status = CustomsStatus::from_str(&self.customs_status)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        let shipping_status = ShippingStatus::from_str(&self.shipping_status)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        Ok(ShippingDetailView {
            shipping_id: self.shipping_id,
            order_no: self.order_no,
            tracking_no: self.tracking_no,
            carrier: self.carrier,
            shipping_method: self.shipping_method,
            origin_port: self.origin_port,
            destination_port: self.destination_port,
            estimated_departure: self.estimated_departure,
            actual_departure: self.actual_departure,
            estimated_arrival: self.estimated_arrival,
            actual_arrival: self.actual_arrival,
            customs_status,
            shipping_status,
            package_info: self.package_info,
            tracks,
        })
    }
}

/// Internal row type for track events.
#[derive(Debug, sqlx::FromRow)]
struct TrackRow {
    track_time: DateTime<Utc>,
    location: Option<String>,
    status: Option<String>,
    description: Option<String>,
}

impl From<TrackRow> for TrackEventView {
    fn from(row: TrackRow) -> Self {
        Self {
            track_time: row.track_time,
            location: row.location,
            status: row.status,
            description: row.description,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for shipping read operations.
pub struct ShippingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShippingRepository<'a> {
    /// Create a new shipping repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the shipping record for an order (0 or 1 per order) and
    /// attach its track events ordered by event time ascending.
    ///
    /// Returns `None` when the order has no shipping record; order
    /// existence is not checked separately. Events are returned as stored -
    /// backdated or out-of-order insertion is an upstream concern and is
    /// not corrected here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::DataCorruption` if a status column holds an
    /// unrecognized value.
    pub async fn select_shipping_detail(
        &self,
        order_no: &str,
    ) -> Result<Option<ShippingDetailView>, RepositoryError> {
        let record = sqlx::query_as::<_, ShippingRow>(
            r"
            SELECT si.id                  AS shipping_id,
                   o.order_no             AS order_no,
                   si.tracking_no         AS tracking_no,
                   si.carrier             AS carrier,
                   si.shipping_method     AS shipping_method,
                   si.origin_port         AS origin_port,
                   si.destination_port    AS destination_port,
                   si.estimated_departure AS estimated_departure,
                   si.actual_departure    AS actual_departure,
                   si.estimated_arrival   AS estimated_arrival,
                   si.actual_arrival      AS actual_arrival,
                   si.customs_status      AS customs_status,
                   si.shipping_status     AS shipping_status,
                   si.package_info        AS package_info
            FROM shipping_info si
            JOIN order_info o ON o.id = si.order_id
            WHERE o.order_no = $1
            ",
        )
        .bind(order_no)
        .fetch_optional(self.pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let tracks = sqlx::query_as::<_, TrackRow>(
            r"
            SELECT track_time, location, status, description
            FROM shipping_track
            WHERE shipping_id = $1
            ORDER BY track_time ASC
            ",
        )
        .bind(record.shipping_id)
        .fetch_all(self.pool)
        .await?;

        let tracks = tracks.into_iter().map(TrackEventView::from).collect();
        record.into_view(tracks).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customs: &str, shipping: &str) -> ShippingRow {
        ShippingRow {
            shipping_id: ShippingId::new(3),
            order_no: "ORD202501001".to_string(),
            tracking_no: Some("MAEU1234567".to_string()),
            carrier: Some("Maersk".to_string()),
            shipping_method: Some("SEA".to_string()),
            origin_port: Some("Shenzhen".to_string()),
            destination_port: Some("Long Beach".to_string()),
            estimated_departure: NaiveDate::from_ymd_opt(2025, 1, 10),
            actual_departure: NaiveDate::from_ymd_opt(2025, 1, 11),
            estimated_arrival: NaiveDate::from_ymd_opt(2025, 2, 2),
            actual_arrival: None,
            customs_status: customs.to_string(),
            shipping_status: shipping.to_string(),
            package_info: Some("2 pallets, 410kg".to_string()),
        }
    }

    #[test]
    fn record_row_parses_both_status_columns() {
        let view = record("UNDER_REVIEW", "CUSTOMS_CLEARANCE")
            .into_view(Vec::new())
            .expect("valid statuses");
        assert_eq!(view.customs_status, CustomsStatus::UnderReview);
        assert_eq!(view.shipping_status, ShippingStatus::CustomsClearance);
    }

    #[test]
    fn unknown_customs_status_is_data_corruption() {
        let err = record("SHREDDED", "IN_TRANSIT")
            .into_view(Vec::new())
            .expect_err("must fail");
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
