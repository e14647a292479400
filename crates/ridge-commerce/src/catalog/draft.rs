//! Admin product form handling.
//!
//! `ProductDraft` is what the back-office edits: a loosely-filled form that
//! must pass validation before it becomes a catalog `Product`. Validation
//! reports every problem at once so the form can annotate all fields in a
//! single pass, and distinguishes hard errors from launch-blocking-only
//! warnings (a missing Georgian name is a warning; products can go live
//! English-first).

use crate::catalog::{slugify, Product, ProductImage, ProductStatus};
use crate::error::CommerceError;
use crate::ids::{BrandId, CategoryId};
use crate::money::{Currency, Money};
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Severity of a form issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The draft cannot be saved.
    Error,
    /// The draft can be saved, but the operator should know.
    Warning,
}

/// A single validation finding against a draft field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Form field the issue belongs to.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Whether this blocks saving.
    pub severity: Severity,
}

impl FieldIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// An unsaved product form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    /// Stock keeping unit.
    pub sku: String,
    /// English name (required).
    pub name_en: String,
    /// Georgian name (recommended).
    pub name_ka: String,
    /// English description.
    pub description_en: String,
    /// Georgian description.
    pub description_ka: String,
    /// URL slug; derived from the English name when left empty.
    pub slug: String,
    /// Brand reference.
    pub brand_id: Option<BrandId>,
    /// Category reference.
    pub category_id: Option<CategoryId>,
    /// Price in smallest currency unit.
    pub price_cents: i64,
    /// Currency code.
    pub currency: Currency,
    /// Compare-at price in smallest currency unit.
    pub compare_at_cents: Option<i64>,
    /// Units in stock.
    pub stock: u32,
    /// Smallest orderable quantity.
    pub min_order_quantity: u32,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Image URLs in display order.
    pub image_urls: Vec<String>,
    /// Tags.
    pub tags: Vec<String>,
}

impl ProductDraft {
    /// Create an empty draft with sane numeric defaults.
    pub fn new() -> Self {
        Self {
            min_order_quantity: 1,
            ..Self::default()
        }
    }

    /// Validate the draft, returning every issue found.
    ///
    /// An empty result means the draft is clean; a result with only
    /// warnings still converts via [`ProductDraft::into_product`].
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        if self.sku.trim().is_empty() {
            issues.push(FieldIssue::error("sku", "SKU is required"));
        }
        if self.name_en.trim().is_empty() {
            issues.push(FieldIssue::error("name_en", "English name is required"));
        }
        if self.name_ka.trim().is_empty() {
            issues.push(FieldIssue::warning(
                "name_ka",
                "Georgian name is missing; the storefront will fall back to English",
            ));
        }
        if self.price_cents < 0 {
            issues.push(FieldIssue::error("price", "Price cannot be negative"));
        }
        if let Some(compare_at) = self.compare_at_cents {
            if compare_at <= self.price_cents {
                issues.push(FieldIssue::warning(
                    "compare_at_price",
                    "Compare-at price does not exceed the selling price",
                ));
            }
        }
        if self.min_order_quantity == 0 {
            issues.push(FieldIssue::error(
                "min_order_quantity",
                "Minimum order quantity must be at least 1",
            ));
        }
        if !self.slug.is_empty() && self.slug != slugify(&self.slug) {
            issues.push(FieldIssue::error(
                "slug",
                "Slug may only contain lowercase letters, digits and dashes",
            ));
        }

        let mut seen_sizes = Vec::new();
        for size in &self.sizes {
            if seen_sizes.contains(&size) {
                issues.push(FieldIssue::error(
                    "sizes",
                    format!("Duplicate size \"{}\"", size),
                ));
            } else {
                seen_sizes.push(size);
            }
        }

        if self.image_urls.is_empty() {
            issues.push(FieldIssue::warning("images", "Product has no images"));
        }

        issues
    }

    /// Check whether the draft has no blocking errors.
    pub fn is_valid(&self) -> bool {
        !self
            .validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Convert the draft into a catalog product.
    ///
    /// Fails with the joined error messages when any blocking issue is
    /// present; warnings do not block.
    pub fn into_product(self) -> Result<Product, CommerceError> {
        let errors: Vec<String> = self
            .validate()
            .into_iter()
            .filter(|issue| issue.severity == Severity::Error)
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect();
        if !errors.is_empty() {
            return Err(CommerceError::validation(errors.join("; ")));
        }

        let name = LocalizedText::new(self.name_en.trim(), self.name_ka.trim());
        let slug = if self.slug.is_empty() {
            slugify(&name.en)
        } else {
            self.slug
        };

        let mut product = Product::new(
            self.sku.trim().to_string(),
            name,
            Money::new(self.price_cents, self.currency),
        );
        product.description = LocalizedText::new(self.description_en, self.description_ka);
        product.slug = slug;
        product.brand_id = self.brand_id;
        product.category_id = self.category_id;
        product.compare_at_price = self
            .compare_at_cents
            .map(|cents| Money::new(cents, self.currency));
        product.stock = self.stock;
        product.min_order_quantity = self.min_order_quantity.max(1);
        product.sizes = self.sizes;
        product.images = self
            .image_urls
            .into_iter()
            .enumerate()
            .map(|(position, url)| ProductImage::new(url, position as i32))
            .collect();
        product.tags = self.tags;
        product.status = ProductStatus::Active;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            sku: "RG-100".to_string(),
            name_en: "Combat Shirt".to_string(),
            name_ka: "\u{10e1}\u{10d0}\u{10d1}\u{10e0}\u{10eb}\u{10dd}\u{10da}\u{10dd} \u{10de}\u{10d4}\u{10e0}\u{10d0}\u{10dc}\u{10d2}\u{10d8}".to_string(),
            price_cents: 15900,
            currency: Currency::GEL,
            stock: 20,
            min_order_quantity: 1,
            sizes: vec!["M".to_string(), "L".to_string()],
            image_urls: vec!["https://img/shirt.jpg".to_string()],
            ..ProductDraft::new()
        }
    }

    #[test]
    fn test_clean_draft_converts() {
        let product = filled_draft().into_product().unwrap();
        assert_eq!(product.sku, "RG-100");
        assert_eq!(product.slug, "combat-shirt");
        assert_eq!(product.images.len(), 1);
        assert_eq!(product.images[0].position, 0);
    }

    #[test]
    fn test_missing_required_fields() {
        let draft = ProductDraft::new();
        let issues = draft.validate();

        assert!(issues.iter().any(|i| i.field == "sku" && i.severity == Severity::Error));
        assert!(issues.iter().any(|i| i.field == "name_en" && i.severity == Severity::Error));
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_missing_georgian_is_warning_only() {
        let mut draft = filled_draft();
        draft.name_ka.clear();

        let issues = draft.validate();
        let georgian = issues.iter().find(|i| i.field == "name_ka").unwrap();
        assert_eq!(georgian.severity, Severity::Warning);
        assert!(draft.is_valid());
        assert!(draft.into_product().is_ok());
    }

    #[test]
    fn test_duplicate_sizes_rejected() {
        let mut draft = filled_draft();
        draft.sizes = vec!["M".to_string(), "M".to_string()];
        assert!(!draft.is_valid());
        assert!(draft.into_product().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut draft = filled_draft();
        draft.price_cents = -100;
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_bad_slug_rejected() {
        let mut draft = filled_draft();
        draft.slug = "Combat Shirt!".to_string();
        assert!(!draft.is_valid());

        draft.slug = "combat-shirt-2".to_string();
        assert!(draft.is_valid());
    }

    #[test]
    fn test_zero_min_order_rejected() {
        let mut draft = filled_draft();
        draft.min_order_quantity = 0;
        assert!(!draft.is_valid());
    }
}
