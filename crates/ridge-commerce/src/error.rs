//! Commerce error types.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Cart mutations never produce these: out-of-range quantities are clamped
/// and unknown line ids are observable no-ops. The error paths belong to
/// checkout handoff and admin-side validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout attempted below the global minimum order value.
    #[error("Order minimum not met: {remaining} more required (minimum {required})")]
    MinimumNotMet {
        /// The policy threshold.
        required: Money,
        /// How much is still missing.
        remaining: Money,
    },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product form failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Currency mismatch in a money calculation.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Shorthand for a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
