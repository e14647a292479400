//! Checkout handoff.
//!
//! The checkout transaction itself is owned by the hosted backend: the
//! storefront builds an [`OrderPayload`] from the cart, submits it to the
//! order-creation endpoint, and clears the cart on success. The payload
//! builder is the gate — it refuses an empty cart or one below the global
//! minimum, leaving the cart untouched either way.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::{ProductId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One line of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadLine {
    /// Catalog product to order.
    pub product_id: ProductId,
    /// Chosen size, if any.
    pub selected_size: Option<String>,
    /// Units to order.
    pub quantity: u32,
    /// Unit price the customer saw.
    pub unit_price: Money,
}

/// The order-creation request sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Customer email.
    pub email: String,
    /// Free-text delivery note.
    pub note: Option<String>,
    /// Currency of all amounts below.
    pub currency: Currency,
    /// Lines read from the cart in display order.
    pub lines: Vec<PayloadLine>,
    /// Cart subtotal at submission time.
    pub subtotal: Money,
}

impl OrderPayload {
    /// Build a payload from the current cart contents.
    ///
    /// Fails with [`CommerceError::EmptyCart`] or
    /// [`CommerceError::MinimumNotMet`]; on success the payload carries one
    /// line per cart line.
    pub fn from_cart(cart: &Cart, email: impl Into<String>) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if !cart.minimum_met() {
            return Err(CommerceError::MinimumNotMet {
                required: cart.policy().global_minimum,
                remaining: cart.minimum_remaining(),
            });
        }

        let lines = cart
            .lines()
            .iter()
            .map(|line| PayloadLine {
                product_id: line.product_id.clone(),
                selected_size: line.selected_size.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        Ok(Self {
            user_id: None,
            email: email.into(),
            note: None,
            currency: cart.policy().currency,
            lines,
            subtotal: cart.subtotal(),
        })
    }

    /// Attach the authenticated customer.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach a delivery note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Total unit count in the payload.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}
