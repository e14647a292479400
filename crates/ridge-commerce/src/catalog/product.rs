//! Product types.

use crate::ids::{BrandId, CategoryId, MediaId, ProductId};
use crate::money::Money;
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// An image attached to a product, ordered by `position`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// Unique media identifier.
    pub id: MediaId,
    /// Public URL of the uploaded file.
    pub url: String,
    /// Sort order position (0 = primary image).
    pub position: i32,
}

impl ProductImage {
    /// Create a new image at the given position.
    pub fn new(url: impl Into<String>, position: i32) -> Self {
        Self {
            id: MediaId::generate(),
            url: url.into(),
            position,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name (English/Georgian).
    pub name: LocalizedText,
    /// Full description (English/Georgian).
    pub description: LocalizedText,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Brand this product belongs to.
    pub brand_id: Option<BrandId>,
    /// Category this product belongs to.
    pub category_id: Option<CategoryId>,
    /// Current price.
    pub price: Money,
    /// Compare-at price (original price for showing markdowns).
    pub compare_at_price: Option<Money>,
    /// Units currently in stock.
    pub stock: u32,
    /// Smallest quantity a customer may order.
    pub min_order_quantity: u32,
    /// Available sizes; empty means the product has no size dimension.
    pub sizes: Vec<String>,
    /// Images, ordered by position.
    pub images: Vec<ProductImage>,
    /// Product visibility status.
    pub status: ProductStatus,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product with defaults.
    pub fn new(sku: impl Into<String>, name: LocalizedText, price: Money) -> Self {
        let now = current_timestamp();
        let slug = crate::catalog::slugify(&name.en);
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name,
            description: LocalizedText::default(),
            slug,
            brand_id: None,
            category_id: None,
            price,
            compare_at_price: None,
            stock: 0,
            min_order_quantity: 1,
            sizes: Vec::new(),
            images: Vec::new(),
            status: ProductStatus::Active,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is visible and purchasable.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active && self.stock > 0
    }

    /// Check if the product is sold in sizes.
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Check if the product is marked down from a compare-at price.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|original| original.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Get the primary image, if any.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.iter().min_by_key(|img| img.position)
    }

    /// Add a tag, ignoring duplicates.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Move the image at index `from` to index `to`, renumbering positions.
    ///
    /// This is the drag-reorder operation from the admin gallery. Returns
    /// false (and changes nothing) when either index is out of bounds.
    pub fn reorder_images(&mut self, from: usize, to: usize) -> bool {
        if from >= self.images.len() || to >= self.images.len() {
            return false;
        }
        if from != to {
            let image = self.images.remove(from);
            self.images.insert(to, image);
        }
        for (position, image) in self.images.iter_mut().enumerate() {
            image.position = position as i32;
        }
        self.updated_at = current_timestamp();
        true
    }

    /// Archive the product, hiding it from the storefront.
    pub fn archive(&mut self) {
        self.status = ProductStatus::Archived;
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
