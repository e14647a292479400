//! Typed client for the hosted data backend.
//!
//! Persistence, auth, and querying live in a managed backend service; this
//! crate is the seam the storefront and back-office talk through. Row
//! queries are described with [`ridge_commerce::search::CatalogQuery`] and
//! rendered to the backend's filter parameters; results come back as the
//! domain types.

mod client;
mod config;
mod error;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use error::BackendError;
