//! Catalog query module.
//!
//! Read-only query descriptions for the hosted backend: filters, sorting,
//! and pagination, rendered to the row API's query parameters.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{CatalogQuery, SortOption};
pub use results::{Pagination, SearchResults};
