//! Category and brand types for catalog organization.

use crate::ids::{BrandId, CategoryId};
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// The catalog is a shallow tree: top-level departments (e.g. "Apparel",
/// "Load Bearing") with optional one-level subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Parent category ID (None for top-level categories).
    pub parent_id: Option<CategoryId>,
    /// Category name (English/Georgian).
    pub name: LocalizedText,
    /// URL-friendly slug.
    pub slug: String,
    /// Sort order position within parent.
    pub position: i32,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Category {
    /// Create a new top-level category.
    pub fn new(name: LocalizedText, slug: impl Into<String>) -> Self {
        let now = super::product::current_timestamp();
        Self {
            id: CategoryId::generate(),
            parent_id: None,
            name,
            slug: slug.into(),
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a subcategory of an existing category.
    pub fn new_child(parent: &Category, name: LocalizedText, slug: impl Into<String>) -> Self {
        let mut category = Self::new(name, slug);
        category.parent_id = Some(parent.id.clone());
        category
    }

    /// Check if this is a top-level category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A gear brand carried by the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name (English/Georgian).
    pub name: LocalizedText,
    /// URL-friendly slug.
    pub slug: String,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Brand {
    /// Create a new brand.
    pub fn new(name: LocalizedText, slug: impl Into<String>) -> Self {
        let now = super::product::current_timestamp();
        Self {
            id: BrandId::generate(),
            name,
            slug: slug.into(),
            logo_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_hierarchy() {
        let apparel = Category::new(LocalizedText::english("Apparel"), "apparel");
        let jackets = Category::new_child(&apparel, LocalizedText::english("Jackets"), "jackets");

        assert!(apparel.is_root());
        assert!(!jackets.is_root());
        assert_eq!(jackets.parent_id.as_ref(), Some(&apparel.id));
    }

    #[test]
    fn test_brand() {
        let brand = Brand::new(LocalizedText::english("Helikon-Tex"), "helikon-tex");
        assert_eq!(brand.slug, "helikon-tex");
        assert!(brand.logo_url.is_none());
    }
}
