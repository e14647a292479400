//! End-to-end flow of the persisted cart: browse, add, reload, check out.

use ridge_commerce::cart::{AddItem, CartPolicy, CartSession};
use ridge_commerce::checkout::OrderPayload;
use ridge_commerce::ids::SessionId;
use ridge_commerce::money::{Currency, Money};
use ridge_commerce::text::LocalizedText;
use ridge_store::Cache;

fn gear(product: &str, price_cents: i64, stock: u32) -> AddItem {
    AddItem::new(
        product,
        LocalizedText::english("Field Gear"),
        Money::new(price_cents, Currency::GEL),
    )
    .with_stock(stock)
}

#[test]
fn cart_survives_navigation_and_clears_after_checkout() {
    let cache = Cache::memory();
    let session_id = SessionId::new("browser-session");

    // Product page: add two items.
    let mut session =
        CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
    session
        .add(gear("carrier", 42_900, 4).with_size("L"))
        .unwrap();
    session.add(gear("belt", 8_900, 12).with_quantity(2)).unwrap();

    // Page navigation: a fresh session restores the same lines.
    let mut session =
        CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
    assert_eq!(session.cart().unique_line_count(), 2);
    assert_eq!(session.cart().subtotal().amount_cents, 60_700);
    assert!(session.cart().minimum_met());

    // Checkout: build the payload, then clear on success.
    let payload = OrderPayload::from_cart(session.cart(), "buyer@ridgeline-supply.ge").unwrap();
    assert_eq!(payload.lines.len(), 2);
    assert_eq!(payload.subtotal.amount_cents, 60_700);

    session.clear().unwrap();
    assert!(session.cart().is_empty());

    // Reload path sees the cleared state too.
    let session = CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
    assert!(session.cart().is_empty());
}

#[test]
fn minimum_gate_blocks_until_threshold() {
    let cache = Cache::memory();
    let session_id = SessionId::new("gated-session");

    let mut session =
        CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
    session.add(gear("gloves", 6_500, 10)).unwrap();

    assert!(!session.cart().minimum_met());
    assert_eq!(session.minimum_remaining().amount_cents, 13_500);
    assert!(OrderPayload::from_cart(session.cart(), "buyer@x.ge").is_err());

    session.add(gear("jacket", 19_900, 5)).unwrap();
    assert!(session.cart().minimum_met());
    assert!(OrderPayload::from_cart(session.cart(), "buyer@x.ge").is_ok());
}

#[test]
fn file_backed_cart_round_trip() {
    let dir = std::env::temp_dir().join(format!("ridge-cart-test-{}", std::process::id()));
    let cache = Cache::file(&dir).unwrap();
    let session_id = SessionId::new("file-session");

    {
        let mut session =
            CartSession::open(cache.clone(), &session_id, CartPolicy::default()).unwrap();
        session.add(gear("carrier", 42_900, 4)).unwrap();
    }

    let session = CartSession::open(cache, &session_id, CartPolicy::default()).unwrap();
    assert_eq!(session.cart().total_items(), 1);

    std::fs::remove_dir_all(&dir).ok();
}
