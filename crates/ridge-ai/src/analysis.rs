//! Analysis results and their mapping onto the product form.

use ridge_commerce::catalog::ProductDraft;
use serde::{Deserialize, Serialize};

/// What the vision model inferred from a product photo.
///
/// Every field is optional: the model fills what it can recognize and the
/// operator completes the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    /// Suggested English name.
    #[serde(default)]
    pub name_en: Option<String>,
    /// Suggested Georgian name.
    #[serde(default)]
    pub name_ka: Option<String>,
    /// Suggested English description.
    #[serde(default)]
    pub description_en: Option<String>,
    /// Suggested Georgian description.
    #[serde(default)]
    pub description_ka: Option<String>,
    /// Slug of the category the item most likely belongs to.
    #[serde(default)]
    pub category_slug: Option<String>,
    /// Suggested tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sizes detected on labels or packaging.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Suggested price in smallest currency unit.
    #[serde(default)]
    pub suggested_price_cents: Option<i64>,
    /// Model confidence, 0.0 to 1.0.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ProductAnalysis {
    /// Copy suggestions into a draft, filling only fields the operator has
    /// not already set. Hand-entered values always win.
    pub fn apply_to(&self, draft: &mut ProductDraft) {
        if draft.name_en.is_empty() {
            if let Some(name) = &self.name_en {
                draft.name_en = name.clone();
            }
        }
        if draft.name_ka.is_empty() {
            if let Some(name) = &self.name_ka {
                draft.name_ka = name.clone();
            }
        }
        if draft.description_en.is_empty() {
            if let Some(description) = &self.description_en {
                draft.description_en = description.clone();
            }
        }
        if draft.description_ka.is_empty() {
            if let Some(description) = &self.description_ka {
                draft.description_ka = description.clone();
            }
        }
        if draft.price_cents == 0 {
            if let Some(price) = self.suggested_price_cents {
                draft.price_cents = price;
            }
        }
        if draft.sizes.is_empty() {
            draft.sizes = self.sizes.clone();
        }
        for tag in &self.tags {
            if !draft.tags.contains(tag) {
                draft.tags.push(tag.clone());
            }
        }
    }
}
