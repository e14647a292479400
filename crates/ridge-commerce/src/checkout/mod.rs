//! Checkout module.
//!
//! Contains the order payload builder (the cart → backend handoff) and the
//! order rows read back from the backend.

mod order;
mod payload;

pub use order::{Order, OrderLine, OrderStatus};
pub use payload::{OrderPayload, PayloadLine};
