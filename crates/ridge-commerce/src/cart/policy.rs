//! Cart policy: the business rules injected into every cart.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default global minimum order value: 200.00 GEL.
pub const DEFAULT_GLOBAL_MINIMUM_CENTS: i64 = 20_000;

/// Business rules a cart is constructed with.
///
/// The policy is passed in by the caller rather than read from ambient
/// state, so storefront and tests can run different carts with different
/// rules side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartPolicy {
    /// Currency totals are reported in. The catalog is single-currency,
    /// so every line is expected to be priced in this currency.
    pub currency: Currency,
    /// Order value the cart must reach before checkout may proceed.
    pub global_minimum: Money,
}

impl CartPolicy {
    /// Create a policy with an explicit minimum.
    pub fn new(currency: Currency, global_minimum: Money) -> Self {
        Self {
            currency,
            global_minimum,
        }
    }

    /// Create a policy with no minimum order value.
    pub fn no_minimum(currency: Currency) -> Self {
        Self {
            currency,
            global_minimum: Money::zero(currency),
        }
    }
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self {
            currency: Currency::GEL,
            global_minimum: Money::new(DEFAULT_GLOBAL_MINIMUM_CENTS, Currency::GEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = CartPolicy::default();
        assert_eq!(policy.currency, Currency::GEL);
        assert_eq!(policy.global_minimum.amount_cents, 20_000);
    }

    #[test]
    fn test_no_minimum() {
        let policy = CartPolicy::no_minimum(Currency::GEL);
        assert!(policy.global_minimum.is_zero());
    }
}
