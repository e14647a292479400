//! Paginated result wrapper.

use serde::{Deserialize, Serialize};

/// Pagination metadata for a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total matching items across all pages.
    pub total: i64,
}

impl Pagination {
    /// Number of pages needed for `total` items.
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            return 0;
        }
        (self.total + self.per_page - 1) / self.per_page
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// One page of fetched rows plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The fetched rows.
    pub items: Vec<T>,
    /// Page metadata.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Wrap a fetched page.
    pub fn new(items: Vec<T>, page: i64, per_page: i64, total: i64) -> Self {
        Self {
            items,
            pagination: Pagination {
                page,
                per_page,
                total,
            },
        }
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let results: SearchResults<u8> = SearchResults::new(vec![], 1, 24, 50);
        assert_eq!(results.pagination.total_pages(), 3);
        assert!(results.pagination.has_next());
        assert!(!results.pagination.has_prev());
    }

    #[test]
    fn test_exact_page_boundary() {
        let results: SearchResults<u8> = SearchResults::new(vec![], 2, 25, 50);
        assert_eq!(results.pagination.total_pages(), 2);
        assert!(!results.pagination.has_next());
        assert!(results.pagination.has_prev());
    }

    #[test]
    fn test_empty_results() {
        let results: SearchResults<u8> = SearchResults::new(vec![], 1, 24, 0);
        assert_eq!(results.pagination.total_pages(), 0);
        assert!(!results.pagination.has_next());
        assert!(results.is_empty());
    }
}
