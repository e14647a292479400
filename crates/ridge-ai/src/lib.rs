//! AI-assisted product data entry.
//!
//! The back-office can point a vision model at a product photo and get a
//! pre-filled form back: suggested names in both languages, a category,
//! sizes read off the label, a price estimate. The operator reviews and
//! completes the draft; suggestions never overwrite hand-entered values.

mod analysis;
mod client;
mod error;
mod mock;

pub use analysis::ProductAnalysis;
pub use client::{VisionClient, VisionConfig};
pub use error::AiError;
pub use mock::MockAnalyzer;

use async_trait::async_trait;

/// The analysis seam.
///
/// [`VisionClient`] is the production implementation; [`MockAnalyzer`]
/// serves tests and offline demos.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze one product photo.
    async fn analyze(&self, image_url: &str) -> Result<ProductAnalysis, AiError>;
}
