//! E-commerce domain types and logic for the Ridgeline storefront.
//!
//! This crate provides the storefront's and back-office's shared core:
//!
//! - **Catalog**: bilingual products, categories, brands, admin drafts
//! - **Cart**: the session cart with quantity clamping and the
//!   minimum-order gate
//! - **Checkout**: order payload construction and fetched order rows
//! - **Search**: catalog filters, sorting, pagination
//! - **Analytics**: dashboard aggregation over fetched orders
//! - **Import**: CSV bulk import with per-row validation
//!
//! # Example
//!
//! ```rust
//! use ridge_commerce::prelude::*;
//!
//! let mut cart = Cart::new(CartPolicy::default());
//! let outcome = cart.add(
//!     AddItem::new(
//!         "prod-1",
//!         LocalizedText::english("Plate Carrier"),
//!         Money::new(42_900, Currency::GEL),
//!     )
//!     .with_stock(4)
//!     .with_size("L"),
//! );
//!
//! assert!(outcome.line_id().is_some());
//! assert_eq!(cart.total_items(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod text;

pub mod analytics;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod import;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use text::{Lang, LocalizedText};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::text::{Lang, LocalizedText};

    // Catalog
    pub use crate::catalog::{
        Brand, Category, FieldIssue, Product, ProductDraft, ProductImage, ProductStatus, Severity,
    };

    // Cart
    pub use crate::cart::{AddItem, AddOutcome, Cart, CartLine, CartPolicy, UpdateOutcome};
    #[cfg(feature = "persistence")]
    pub use crate::cart::CartSession;

    // Checkout
    pub use crate::checkout::{Order, OrderLine, OrderPayload, OrderStatus, PayloadLine};

    // Search
    pub use crate::search::{CatalogQuery, Filter, Pagination, SearchResults, SortOption};

    // Analytics
    pub use crate::analytics::{
        customer_stats, monthly_revenue, top_products, CustomerStats, MonthlyRevenue,
        ProductSales, RevenueSummary,
    };

    // Import
    pub use crate::import::{CsvImporter, ImportPlan, ImportProgress, ImportReport, RowIssue};
}
