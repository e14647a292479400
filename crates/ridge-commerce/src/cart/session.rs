//! Persisted cart sessions.
//!
//! A [`CartSession`] wraps a [`Cart`] with write-through persistence: the
//! serialized line array lives under a single storage key
//! (`cart:{session_id}`), is read once when the session opens, and is
//! rewritten after every mutation. `clear` deletes the key. Snapshots
//! older than the TTL are discarded at open rather than resurrected.
//!
//! Two tabs writing the same key are resolved last-writer-wins; there is
//! no merge. [`CartSession::reload`] lets a UI re-read before rendering.

use crate::cart::{AddItem, AddOutcome, Cart, CartLine, CartPolicy, UpdateOutcome};
use crate::ids::{CartLineId, SessionId};
use crate::money::Money;
use ridge_store::{Cache, StoreError};
use serde::{Deserialize, Serialize};

/// How long a persisted cart survives without activity: 7 days.
pub const DEFAULT_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// The persisted layout: the line array plus a write timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CartSnapshot {
    lines: Vec<CartLine>,
    saved_at: i64,
}

/// A cart bound to a storage key.
pub struct CartSession {
    cart: Cart,
    cache: Cache,
    key: String,
    ttl_secs: i64,
}

impl CartSession {
    /// Open the cart for a session, restoring any persisted snapshot that
    /// is still within the TTL.
    pub fn open(cache: Cache, session_id: &SessionId, policy: CartPolicy) -> Result<Self, StoreError> {
        Self::open_with_ttl(cache, session_id, policy, DEFAULT_TTL_SECS)
    }

    /// Open with an explicit TTL in seconds.
    pub fn open_with_ttl(
        cache: Cache,
        session_id: &SessionId,
        policy: CartPolicy,
        ttl_secs: i64,
    ) -> Result<Self, StoreError> {
        let key = storage_key(session_id);
        let mut session = Self {
            cart: Cart::new(policy),
            cache,
            key,
            ttl_secs,
        };
        session.reload()?;
        Ok(session)
    }

    /// The storage key this session writes to.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Re-read the persisted snapshot, replacing in-memory lines.
    ///
    /// Expired or missing snapshots yield an empty cart; an expired key is
    /// deleted on the spot.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let policy = *self.cart.policy();
        match self.cache.get::<CartSnapshot>(&self.key)? {
            Some(snapshot) if now() - snapshot.saved_at <= self.ttl_secs => {
                self.cart = Cart::with_lines(policy, snapshot.lines);
            }
            Some(_) => {
                self.cache.delete(&self.key)?;
                self.cart = Cart::new(policy);
            }
            None => {
                self.cart = Cart::new(policy);
            }
        }
        Ok(())
    }

    /// Add an item and persist.
    pub fn add(&mut self, item: AddItem) -> Result<AddOutcome, StoreError> {
        let outcome = self.cart.add(item);
        if !matches!(outcome, AddOutcome::OutOfStock) {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Update a line's quantity and persist.
    pub fn update_quantity(
        &mut self,
        id: CartLineId,
        quantity: u32,
    ) -> Result<UpdateOutcome, StoreError> {
        let outcome = self.cart.update_quantity(id, quantity);
        if !matches!(outcome, UpdateOutcome::NotFound) {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Remove a line and persist.
    pub fn remove(&mut self, id: CartLineId) -> Result<bool, StoreError> {
        let removed = self.cart.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the cart and drop the persisted key.
    ///
    /// Called on explicit "clear cart" and by checkout after a successful
    /// order submission.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.cache.delete(&self.key)
    }

    /// Convenience passthrough for the minimum-order gate.
    pub fn minimum_remaining(&self) -> Money {
        self.cart.minimum_remaining()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = CartSnapshot {
            lines: self.cart.lines().to_vec(),
            saved_at: now(),
        };
        self.cache.set(&self.key, &snapshot)
    }
}

/// Storage key for a session's cart.
fn storage_key(session_id: &SessionId) -> String {
    format!("cart:{}", session_id)
}

fn now() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::text::LocalizedText;

    fn item(product: &str, price_cents: i64, stock: u32) -> AddItem {
        AddItem::new(
            product,
            LocalizedText::english("Test Gear"),
            Money::new(price_cents, Currency::GEL),
        )
        .with_stock(stock)
    }

    #[test]
    fn test_survives_reopen() {
        let cache = Cache::memory();
        let session_id = SessionId::new("sess-1");

        let mut session =
            CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
        session.add(item("P1", 5000, 10).with_quantity(2)).unwrap();

        let reopened =
            CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
        assert_eq!(reopened.cart().total_items(), 2);
        assert_eq!(reopened.cart().subtotal().amount_cents, 10_000);
    }

    #[test]
    fn test_clear_deletes_key() {
        let cache = Cache::memory();
        let session_id = SessionId::new("sess-2");

        let mut session =
            CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
        session.add(item("P1", 5000, 10)).unwrap();
        let key = session.storage_key().to_string();
        assert!(cache.exists(&key).unwrap());

        session.clear().unwrap();
        assert!(!cache.exists(&key).unwrap());

        let reopened = CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_expired_snapshot_discarded() {
        let cache = Cache::memory();
        let session_id = SessionId::new("sess-3");
        let key = storage_key(&session_id);

        let stale = CartSnapshot {
            lines: vec![],
            saved_at: now() - DEFAULT_TTL_SECS - 60,
        };
        cache.set(&key, &stale).unwrap();

        let session = CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
        assert!(session.cart().is_empty());
        assert!(!cache.exists(&key).unwrap());
    }

    #[test]
    fn test_last_writer_wins_across_sessions() {
        let cache = Cache::memory();
        let session_id = SessionId::new("sess-4");

        let mut tab_a =
            CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
        let mut tab_b =
            CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();

        tab_a.add(item("P1", 5000, 10)).unwrap();
        tab_b.add(item("P2", 3000, 10)).unwrap();

        // Tab B wrote last; a fresh read sees only its line.
        let reopened = CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
        assert_eq!(reopened.cart().unique_line_count(), 1);
        assert_eq!(reopened.cart().lines()[0].product_id.as_str(), "P2");
    }
}
