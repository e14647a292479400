//! Catalog query builder.

use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by newest first.
    #[default]
    Newest,
    /// Sort by oldest first.
    Oldest,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by English name A-Z.
    NameAsc,
    /// Sort by English name Z-A.
    NameDesc,
}

impl SortOption {
    /// Render the backend `order` parameter value.
    pub fn to_order_param(&self) -> &'static str {
        match self {
            SortOption::Newest => "created_at.desc",
            SortOption::Oldest => "created_at.asc",
            SortOption::PriceAsc => "price_cents.asc",
            SortOption::PriceDesc => "price_cents.desc",
            SortOption::NameAsc => "name_en.asc",
            SortOption::NameDesc => "name_en.desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }
}

/// A catalog listing query: filters, sort, and pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Filters to apply (ANDed together).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl CatalogQuery {
    /// Create a query with default sort and pagination.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortOption::Newest,
            page: 1,
            per_page: 24,
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a text search filter (no-op for an empty string).
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.filters.push(Filter::Text(query));
        }
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Render the full parameter list for the backend row API:
    /// filter pairs, then `order`, `limit`, and `offset`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .filters
            .iter()
            .flat_map(|filter| filter.to_params())
            .collect();

        params.push(("order".to_string(), self.sort.to_order_param().to_string()));
        params.push(("limit".to_string(), self.per_page.to_string()));
        params.push(("offset".to_string(), self.offset().to_string()));
        params
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = CatalogQuery::new()
            .with_text("rig")
            .with_filter(Filter::in_stock())
            .with_sort(SortOption::PriceAsc)
            .with_pagination(2, 10);

        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.offset(), 10);
        assert_eq!(query.filters.len(), 2);
    }

    #[test]
    fn test_pagination_bounds() {
        let query = CatalogQuery::new().with_pagination(0, 500);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);
    }

    #[test]
    fn test_to_params_shape() {
        let query = CatalogQuery::new()
            .with_filter(Filter::Status("active".to_string()))
            .with_sort(SortOption::Newest)
            .with_pagination(1, 24);

        let params = query.to_params();
        assert!(params.contains(&("status".to_string(), "eq.active".to_string())));
        assert!(params.contains(&("order".to_string(), "created_at.desc".to_string())));
        assert!(params.contains(&("limit".to_string(), "24".to_string())));
        assert!(params.contains(&("offset".to_string(), "0".to_string())));
    }

    #[test]
    fn test_empty_text_ignored() {
        let query = CatalogQuery::new().with_text("");
        assert!(query.filters.is_empty());
    }
}
