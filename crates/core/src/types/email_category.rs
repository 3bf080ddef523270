//! Email notification categories.
//!
//! Each category carries a human-readable label and a `%s`-style default
//! template. Upstream callers use the templates to pre-fill content; this
//! system only records the final rendered body. Unrecognized or absent
//! category strings resolve to [`EmailCategory::General`] rather than
//! erroring - the resolved category is recorded on the audit row so the
//! fallback stays visible.

use serde::{Deserialize, Serialize};

/// Notification category recorded on `email_log.email_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailCategory {
    ShippingDelay,
    LateShipment,
    OrderConfirm,
    PaymentRemind,
    CustomsAlert,
    General,
}

impl EmailCategory {
    /// All categories, in the order they are documented to callers.
    pub const ALL: [Self; 6] = [
        Self::ShippingDelay,
        Self::LateShipment,
        Self::OrderConfirm,
        Self::PaymentRemind,
        Self::CustomsAlert,
        Self::General,
    ];

    /// Resolve a caller-supplied category string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Blank, absent, or unrecognized input resolves to [`Self::General`];
    /// the degraded match is logged by the caller, never raised as an error.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::General;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::General;
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "SHIPPING_DELAY" => Self::ShippingDelay,
            "LATE_SHIPMENT" => Self::LateShipment,
            "ORDER_CONFIRM" => Self::OrderConfirm,
            "PAYMENT_REMIND" => Self::PaymentRemind,
            "CUSTOMS_ALERT" => Self::CustomsAlert,
            "GENERAL" => Self::General,
            _ => Self::General,
        }
    }

    /// Whether [`Self::resolve`] would fall back for this input.
    #[must_use]
    pub fn is_recognized(raw: &str) -> bool {
        matches!(
            raw.trim().to_ascii_uppercase().as_str(),
            "SHIPPING_DELAY"
                | "LATE_SHIPMENT"
                | "ORDER_CONFIRM"
                | "PAYMENT_REMIND"
                | "CUSTOMS_ALERT"
                | "GENERAL"
        )
    }

    /// Stable wire name, e.g. `SHIPPING_DELAY`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShippingDelay => "SHIPPING_DELAY",
            Self::LateShipment => "LATE_SHIPMENT",
            Self::OrderConfirm => "ORDER_CONFIRM",
            Self::PaymentRemind => "PAYMENT_REMIND",
            Self::CustomsAlert => "CUSTOMS_ALERT",
            Self::General => "GENERAL",
        }
    }

    /// Human-readable label shown to operators.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShippingDelay => "Shipping delay notice",
            Self::LateShipment => "Late shipment notice",
            Self::OrderConfirm => "Order confirmation",
            Self::PaymentRemind => "Payment reminder",
            Self::CustomsAlert => "Customs clearance notice",
            Self::General => "General notification",
        }
    }

    /// Default `%s`-style body template for upstream callers.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::ShippingDelay => {
                "Your order %s is experiencing a shipping delay and is now expected \
                 to arrive %s day(s) late. We apologize for the inconvenience."
            }
            Self::LateShipment => {
                "Your order %s will ship later than planned due to supplier stock \
                 preparation. We are working to dispatch it as soon as possible."
            }
            Self::OrderConfirm => {
                "Your order %s has been confirmed and the seller is processing it. \
                 Thank you for your patience."
            }
            Self::PaymentRemind => {
                "Your order %s has not been paid yet. Please complete payment before \
                 %s to avoid automatic cancellation."
            }
            Self::CustomsAlert => {
                "Your order %s is going through customs clearance, which is expected \
                 to take %s business day(s). Thank you for your patience."
            }
            Self::General => "%s",
        }
    }
}

impl std::fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_matches_case_insensitively() {
        assert_eq!(
            EmailCategory::resolve(Some("shipping_delay")),
            EmailCategory::ShippingDelay
        );
        assert_eq!(
            EmailCategory::resolve(Some("  Payment_Remind  ")),
            EmailCategory::PaymentRemind
        );
    }

    #[test]
    fn resolve_falls_back_to_general() {
        assert_eq!(EmailCategory::resolve(None), EmailCategory::General);
        assert_eq!(EmailCategory::resolve(Some("")), EmailCategory::General);
        assert_eq!(EmailCategory::resolve(Some("   ")), EmailCategory::General);
        assert_eq!(
            EmailCategory::resolve(Some("FLASH_SALE")),
            EmailCategory::General
        );
    }

    #[test]
    fn recognition_tracks_the_resolvable_set() {
        assert!(EmailCategory::is_recognized("customs_alert"));
        assert!(!EmailCategory::is_recognized("FLASH_SALE"));
    }

    #[test]
    fn every_category_has_label_and_template() {
        for category in EmailCategory::ALL {
            assert!(!category.label().is_empty());
            assert!(category.template().contains("%s"));
        }
    }

    #[test]
    fn wire_name_matches_serde() {
        for category in EmailCategory::ALL {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
