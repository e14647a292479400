//! Per-customer dashboard aggregation.

use crate::checkout::Order;
use crate::ids::UserId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The numbers behind a customer's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    /// Orders the customer placed (cancelled excluded).
    pub orders: usize,
    /// Sum of order totals.
    pub lifetime_spend: Money,
    /// Average order value; zero when there are no orders.
    pub average_order_value: Money,
    /// Unix timestamp of the most recent order.
    pub last_order_at: Option<i64>,
}

/// Aggregate one customer's orders out of a fetched order set.
pub fn customer_stats(orders: &[Order], user: &UserId, currency: Currency) -> CustomerStats {
    let mut count = 0usize;
    let mut cents = 0i64;
    let mut last_order_at: Option<i64> = None;

    for order in orders {
        if order.user_id.as_ref() != Some(user) || !order.status.counts_as_revenue() {
            continue;
        }
        count += 1;
        cents = cents.saturating_add(order.total.amount_cents);
        last_order_at = Some(last_order_at.map_or(order.created_at, |t| t.max(order.created_at)));
    }

    let average = if count == 0 { 0 } else { cents / count as i64 };
    CustomerStats {
        orders: count,
        lifetime_spend: Money::new(cents, currency),
        average_order_value: Money::new(average, currency),
        last_order_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::OrderStatus;
    use crate::ids::OrderId;

    fn order(user: Option<&str>, cents: i64, created_at: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::generate(),
            number: "R-1003".to_string(),
            user_id: user.map(UserId::new),
            email: "a@b.ge".to_string(),
            status,
            lines: vec![],
            total: Money::new(cents, Currency::GEL),
            created_at,
        }
    }

    #[test]
    fn test_stats_for_customer() {
        let orders = vec![
            order(Some("u-1"), 10_000, 100, OrderStatus::Paid),
            order(Some("u-1"), 20_000, 300, OrderStatus::Delivered),
            order(Some("u-1"), 9_000, 400, OrderStatus::Cancelled),
            order(Some("u-2"), 50_000, 200, OrderStatus::Paid),
            order(None, 1_000, 500, OrderStatus::Paid),
        ];
        let stats = customer_stats(&orders, &UserId::new("u-1"), Currency::GEL);

        assert_eq!(stats.orders, 2);
        assert_eq!(stats.lifetime_spend.amount_cents, 30_000);
        assert_eq!(stats.average_order_value.amount_cents, 15_000);
        assert_eq!(stats.last_order_at, Some(300));
    }

    #[test]
    fn test_stats_for_unknown_customer() {
        let stats = customer_stats(&[], &UserId::new("u-9"), Currency::GEL);
        assert_eq!(stats.orders, 0);
        assert!(stats.lifetime_spend.is_zero());
        assert_eq!(stats.last_order_at, None);
    }
}
