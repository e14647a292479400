//! Cart line items.

use crate::catalog::Product;
use crate::ids::{CartLineId, ProductId};
use crate::money::Money;
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// One purchasable entry in the cart, keyed by product + size.
///
/// Name, price and stock are snapshots taken when the item was added; the
/// cart never re-fetches them. `stock_at_add` is therefore advisory — a
/// checkout implementation should re-check availability against the live
/// catalog before committing an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Line identity derived from `(product_id, selected_size)`.
    pub id: CartLineId,
    /// Catalog product this line refers to.
    pub product_id: ProductId,
    /// Product name snapshot (English/Georgian).
    pub name: LocalizedText,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// Primary image URL snapshot.
    pub image: Option<String>,
    /// Chosen size; None when the product has no size dimension.
    pub selected_size: Option<String>,
    /// Units of this line in the cart.
    pub quantity: u32,
    /// Stock level when the item was added (upper clamp bound).
    pub stock_at_add: u32,
    /// Smallest orderable quantity (lower clamp bound).
    pub min_order_quantity: u32,
}

impl CartLine {
    /// Total price of the line (`unit_price * quantity`).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(i64::from(self.quantity))
    }

    /// Constrain a requested quantity to this line's bounds.
    ///
    /// Returns the applied value and whether it differs from the request.
    /// When the stock snapshot is below the minimum order quantity the
    /// stock bound wins (the nearest value that can actually be bought).
    pub(crate) fn clamp(&self, requested: u32) -> (u32, bool) {
        let applied = requested
            .max(self.min_order_quantity)
            .min(self.stock_at_add);
        (applied, applied != requested)
    }
}

/// Input to [`Cart::add`](crate::cart::Cart::add): a product snapshot taken
/// by the catalog page at click time.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItem {
    pub product_id: ProductId,
    pub name: LocalizedText,
    pub unit_price: Money,
    pub image: Option<String>,
    pub selected_size: Option<String>,
    /// Stock level at click time.
    pub stock_at_add: u32,
    /// Smallest orderable quantity; zero is treated as 1.
    pub min_order_quantity: u32,
    /// Requested quantity; defaults to the minimum order quantity.
    pub quantity: Option<u32>,
}

impl AddItem {
    /// Build an add request by hand.
    pub fn new(product_id: impl Into<ProductId>, name: LocalizedText, unit_price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            name,
            unit_price,
            image: None,
            selected_size: None,
            stock_at_add: 0,
            min_order_quantity: 1,
            quantity: None,
        }
    }

    /// Snapshot a catalog product, optionally in a chosen size.
    pub fn from_product(product: &Product, selected_size: Option<&str>) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.primary_image().map(|img| img.url.clone()),
            selected_size: selected_size
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            stock_at_add: product.stock,
            min_order_quantity: product.min_order_quantity,
            quantity: None,
        }
    }

    /// Set the chosen size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        let size = size.into();
        self.selected_size = if size.is_empty() { None } else { Some(size) };
        self
    }

    /// Set the requested quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the stock snapshot.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock_at_add = stock;
        self
    }

    /// Set the minimum order quantity.
    pub fn with_min_order(mut self, min: u32) -> Self {
        self.min_order_quantity = min;
        self
    }

    /// Set the image URL snapshot.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// The line identity this request resolves to.
    pub fn line_id(&self) -> CartLineId {
        CartLineId::for_selection(&self.product_id, self.selected_size.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn line(quantity: u32, min: u32, stock: u32) -> CartLine {
        CartLine {
            id: CartLineId::for_selection(&ProductId::new("P1"), None),
            product_id: ProductId::new("P1"),
            name: LocalizedText::english("Patrol Pack"),
            unit_price: Money::new(5000, Currency::GEL),
            image: None,
            selected_size: None,
            quantity,
            stock_at_add: stock,
            min_order_quantity: min,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(3, 1, 10).line_total().amount_cents, 15_000);
    }

    #[test]
    fn test_clamp_within_range() {
        assert_eq!(line(1, 1, 10).clamp(4), (4, false));
    }

    #[test]
    fn test_clamp_to_stock() {
        assert_eq!(line(1, 1, 3).clamp(10), (3, true));
    }

    #[test]
    fn test_clamp_stock_below_minimum() {
        // 2 in stock but minimum order of 5: the stock bound wins.
        assert_eq!(line(2, 5, 2).clamp(5), (2, true));
    }

    #[test]
    fn test_empty_size_normalized() {
        let item = AddItem::new("P1", LocalizedText::english("Pack"), Money::new(1, Currency::GEL))
            .with_size("");
        assert_eq!(item.selected_size, None);
    }
}
