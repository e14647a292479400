//! Order types.
//!
//! Orders are created by the hosted backend; these are the rows the
//! storefront and back-office read back for dashboards and analytics.

use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Money;
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting payment.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Order handed to the courier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order counts toward revenue.
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }
}

/// A line on a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Catalog product the line refers to.
    pub product_id: ProductId,
    /// Product name at order time (denormalized for display).
    pub name: LocalizedText,
    /// Chosen size, if the product has one.
    pub selected_size: Option<String>,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at order time.
    pub unit_price: Money,
}

impl OrderLine {
    /// Total price of the line.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(i64::from(self.quantity))
    }
}

/// A placed order as fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub number: String,
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Customer email.
    pub email: String,
    /// Order status.
    pub status: OrderStatus,
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Order total as computed at submission.
    pub total: Money,
    /// Unix timestamp of placement.
    pub created_at: i64,
}

impl Order {
    /// Total unit count across lines.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(OrderStatus::from_str("PAID"), Some(OrderStatus::Paid));
        assert_eq!(OrderStatus::Paid.as_str(), "paid");
        assert_eq!(OrderStatus::from_str("refunded"), None);
    }

    #[test]
    fn test_revenue_counting() {
        assert!(OrderStatus::Pending.counts_as_revenue());
        assert!(OrderStatus::Delivered.counts_as_revenue());
        assert!(!OrderStatus::Cancelled.counts_as_revenue());
    }

    #[test]
    fn test_line_total() {
        let line = OrderLine {
            product_id: ProductId::new("P1"),
            name: LocalizedText::english("Boots"),
            selected_size: Some("43".to_string()),
            quantity: 2,
            unit_price: Money::new(24_900, Currency::GEL),
        };
        assert_eq!(line.line_total().amount_cents, 49_800);
    }
}
