//! Best-seller aggregation.

use crate::checkout::Order;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sales totals for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: ProductId,
    /// Name as it appeared on the most recent order line.
    pub name: LocalizedText,
    /// Units sold.
    pub units: u64,
    /// Revenue attributed to the product.
    pub revenue: Money,
}

/// Rank products by revenue over the given orders, returning the top `n`.
///
/// Cancelled orders are excluded. Ordering is deterministic: revenue
/// descending, then units descending, then product id.
pub fn top_products(orders: &[Order], n: usize, currency: Currency) -> Vec<ProductSales> {
    let mut by_product: HashMap<ProductId, (LocalizedText, u64, i64)> = HashMap::new();

    for order in orders {
        if !order.status.counts_as_revenue() {
            continue;
        }
        for line in &order.lines {
            let entry = by_product
                .entry(line.product_id.clone())
                .or_insert_with(|| (line.name.clone(), 0, 0));
            entry.0 = line.name.clone();
            entry.1 += u64::from(line.quantity);
            entry.2 = entry.2.saturating_add(line.line_total().amount_cents);
        }
    }

    let mut ranked: Vec<ProductSales> = by_product
        .into_iter()
        .map(|(product_id, (name, units, cents))| ProductSales {
            product_id,
            name,
            units,
            revenue: Money::new(cents, currency),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.revenue
            .amount_cents
            .cmp(&a.revenue.amount_cents)
            .then(b.units.cmp(&a.units))
            .then(a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{OrderLine, OrderStatus};
    use crate::ids::OrderId;

    fn line(product: &str, quantity: u32, unit_cents: i64) -> OrderLine {
        OrderLine {
            product_id: ProductId::new(product),
            name: LocalizedText::english(product),
            selected_size: None,
            quantity,
            unit_price: Money::new(unit_cents, Currency::GEL),
        }
    }

    fn order(lines: Vec<OrderLine>, status: OrderStatus) -> Order {
        let total_cents = lines
            .iter()
            .map(|l| l.line_total().amount_cents)
            .sum::<i64>();
        Order {
            id: OrderId::generate(),
            number: "R-1002".to_string(),
            user_id: None,
            email: "a@b.ge".to_string(),
            status,
            lines,
            total: Money::new(total_cents, Currency::GEL),
            created_at: 0,
        }
    }

    #[test]
    fn test_ranking_by_revenue() {
        let orders = vec![
            order(vec![line("belt", 2, 5000), line("boots", 1, 20_000)], OrderStatus::Paid),
            order(vec![line("belt", 1, 5000)], OrderStatus::Paid),
        ];
        let top = top_products(&orders, 10, Currency::GEL);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id.as_str(), "boots");
        assert_eq!(top[0].revenue.amount_cents, 20_000);
        assert_eq!(top[1].product_id.as_str(), "belt");
        assert_eq!(top[1].units, 3);
        assert_eq!(top[1].revenue.amount_cents, 15_000);
    }

    #[test]
    fn test_truncates_to_n() {
        let orders = vec![order(
            vec![line("a", 1, 100), line("b", 1, 200), line("c", 1, 300)],
            OrderStatus::Paid,
        )];
        let top = top_products(&orders, 2, Currency::GEL);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id.as_str(), "c");
    }

    #[test]
    fn test_cancelled_orders_ignored() {
        let orders = vec![order(vec![line("belt", 5, 5000)], OrderStatus::Cancelled)];
        assert!(top_products(&orders, 10, Currency::GEL).is_empty());
    }

    #[test]
    fn test_tie_broken_by_units_then_id() {
        let orders = vec![order(
            vec![line("a", 2, 500), line("b", 1, 1000)],
            OrderStatus::Paid,
        )];
        let top = top_products(&orders, 10, Currency::GEL);

        // Equal revenue; "a" wins on units.
        assert_eq!(top[0].product_id.as_str(), "a");
        assert_eq!(top[1].product_id.as_str(), "b");
    }
}
