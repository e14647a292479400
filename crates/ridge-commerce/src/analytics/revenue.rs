//! Revenue aggregation over fetched order rows.
//!
//! Everything here is a pure fold over `&[Order]` — the rows come from the
//! backend, the shaping happens client-side. Cancelled orders never count
//! toward revenue.

use crate::checkout::Order;
use crate::money::{Currency, Money};
use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline revenue numbers for a set of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Orders counted (cancelled excluded).
    pub orders: usize,
    /// Sum of order totals.
    pub gross_revenue: Money,
    /// Average order value; zero when there are no orders.
    pub average_order_value: Money,
}

impl RevenueSummary {
    /// Aggregate the given orders.
    pub fn for_orders(orders: &[Order], currency: Currency) -> Self {
        let counted: Vec<&Order> = orders
            .iter()
            .filter(|o| o.status.counts_as_revenue())
            .collect();

        let cents = counted
            .iter()
            .fold(0i64, |acc, o| acc.saturating_add(o.total.amount_cents));
        let average = if counted.is_empty() {
            0
        } else {
            cents / counted.len() as i64
        };

        Self {
            orders: counted.len(),
            gross_revenue: Money::new(cents, currency),
            average_order_value: Money::new(average, currency),
        }
    }
}

/// Revenue for one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    /// 1-indexed calendar month.
    pub month: u32,
    /// Orders placed in the month (cancelled excluded).
    pub orders: usize,
    /// Revenue for the month.
    pub revenue: Money,
}

impl MonthlyRevenue {
    /// Format as "YYYY-MM".
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Month-over-month change in percent, relative to `prev`.
    ///
    /// Returns None when the previous month had zero revenue (no meaningful
    /// baseline).
    pub fn change_from(&self, prev: &MonthlyRevenue) -> Option<f64> {
        if prev.revenue.amount_cents == 0 {
            return None;
        }
        let delta = self.revenue.amount_cents - prev.revenue.amount_cents;
        Some(delta as f64 / prev.revenue.amount_cents as f64 * 100.0)
    }
}

/// Group orders into calendar months, ascending.
///
/// Months with no orders are absent from the result; chart layers decide
/// how to render gaps.
pub fn monthly_revenue(orders: &[Order], currency: Currency) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<(i32, u32), (usize, i64)> = BTreeMap::new();

    for order in orders {
        if !order.status.counts_as_revenue() {
            continue;
        }
        let Some(placed) = DateTime::from_timestamp(order.created_at, 0) else {
            continue;
        };
        let entry = months.entry((placed.year(), placed.month())).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(order.total.amount_cents);
    }

    months
        .into_iter()
        .map(|((year, month), (orders, cents))| MonthlyRevenue {
            year,
            month,
            orders,
            revenue: Money::new(cents, currency),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::OrderStatus;
    use crate::ids::OrderId;

    fn order(cents: i64, created_at: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::generate(),
            number: "R-1001".to_string(),
            user_id: None,
            email: "a@b.ge".to_string(),
            status,
            lines: vec![],
            total: Money::new(cents, Currency::GEL),
            created_at,
        }
    }

    // 2026-01-15 and 2026-02-10, both 12:00 UTC.
    const JAN: i64 = 1_768_478_400;
    const FEB: i64 = 1_770_724_800;

    #[test]
    fn test_summary_excludes_cancelled() {
        let orders = vec![
            order(10_000, JAN, OrderStatus::Paid),
            order(30_000, JAN, OrderStatus::Delivered),
            order(99_000, JAN, OrderStatus::Cancelled),
        ];
        let summary = RevenueSummary::for_orders(&orders, Currency::GEL);

        assert_eq!(summary.orders, 2);
        assert_eq!(summary.gross_revenue.amount_cents, 40_000);
        assert_eq!(summary.average_order_value.amount_cents, 20_000);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = RevenueSummary::for_orders(&[], Currency::GEL);
        assert_eq!(summary.orders, 0);
        assert!(summary.gross_revenue.is_zero());
        assert!(summary.average_order_value.is_zero());
    }

    #[test]
    fn test_monthly_grouping() {
        let orders = vec![
            order(10_000, JAN, OrderStatus::Paid),
            order(5_000, JAN, OrderStatus::Paid),
            order(20_000, FEB, OrderStatus::Paid),
            order(7_000, FEB, OrderStatus::Cancelled),
        ];
        let months = monthly_revenue(&orders, Currency::GEL);

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label(), "2026-01");
        assert_eq!(months[0].orders, 2);
        assert_eq!(months[0].revenue.amount_cents, 15_000);
        assert_eq!(months[1].label(), "2026-02");
        assert_eq!(months[1].revenue.amount_cents, 20_000);
    }

    #[test]
    fn test_month_over_month_change() {
        let months = monthly_revenue(
            &[
                order(10_000, JAN, OrderStatus::Paid),
                order(15_000, FEB, OrderStatus::Paid),
            ],
            Currency::GEL,
        );
        let change = months[1].change_from(&months[0]).unwrap();
        assert!((change - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_change_without_baseline() {
        let zero = MonthlyRevenue {
            year: 2026,
            month: 1,
            orders: 0,
            revenue: Money::zero(Currency::GEL),
        };
        let feb = MonthlyRevenue {
            year: 2026,
            month: 2,
            orders: 1,
            revenue: Money::new(1000, Currency::GEL),
        };
        assert_eq!(feb.change_from(&zero), None);
    }
}
