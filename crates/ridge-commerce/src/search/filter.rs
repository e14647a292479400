//! Catalog filter types.

use crate::ids::{BrandId, CategoryId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog filter.
///
/// Filters describe *what* to narrow by; [`Filter::to_params`] renders the
/// backend's row-filter query parameters (`column=op.value` pairs), so the
/// hosted backend does the actual narrowing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category.
    Category(CategoryId),
    /// Filter by brand.
    Brand(BrandId),
    /// Filter by price range (inclusive bounds, in cents).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock products.
    InStock,
    /// Filter by tag.
    Tag(String),
    /// Case-insensitive search in either name column.
    Text(String),
    /// Filter by product status.
    Status(String),
    /// Filter by SKU prefix.
    SkuPrefix(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a brand filter.
    pub fn brand(id: impl Into<BrandId>) -> Self {
        Filter::Brand(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a tag filter.
    pub fn tag(tag: impl Into<String>) -> Self {
        Filter::Tag(tag.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Render the query parameters for this filter.
    pub fn to_params(&self) -> Vec<(String, String)> {
        match self {
            Filter::Category(id) => {
                vec![("category_id".to_string(), format!("eq.{}", id.as_str()))]
            }
            Filter::Brand(id) => {
                vec![("brand_id".to_string(), format!("eq.{}", id.as_str()))]
            }
            Filter::PriceRange { min, max } => {
                let mut params = Vec::new();
                if let Some(min) = min {
                    params.push(("price_cents".to_string(), format!("gte.{}", min.amount_cents)));
                }
                if let Some(max) = max {
                    params.push(("price_cents".to_string(), format!("lte.{}", max.amount_cents)));
                }
                params
            }
            Filter::InStock => vec![("stock".to_string(), "gt.0".to_string())],
            Filter::Tag(tag) => vec![("tags".to_string(), format!("cs.{{{}}}", tag))],
            Filter::Text(query) => vec![(
                "or".to_string(),
                format!("(name_en.ilike.*{q}*,name_ka.ilike.*{q}*)", q = query),
            )],
            Filter::Status(status) => vec![("status".to_string(), format!("eq.{}", status))],
            Filter::SkuPrefix(prefix) => vec![("sku".to_string(), format!("like.{}*", prefix))],
        }
    }
}
