//! Shopping cart module.
//!
//! Contains the cart engine, its line items and policy, and (behind the
//! `persistence` feature) the storage-backed session wrapper.

mod cart;
mod line;
mod policy;

#[cfg(feature = "persistence")]
mod session;

pub use cart::{AddOutcome, Cart, UpdateOutcome};
pub use line::{AddItem, CartLine};
pub use policy::{CartPolicy, DEFAULT_GLOBAL_MINIMUM_CENTS};

#[cfg(feature = "persistence")]
pub use session::{CartSession, DEFAULT_TTL_SECS};
