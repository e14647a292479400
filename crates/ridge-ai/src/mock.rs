//! Canned analyzer for tests and offline demos.

use crate::{AiError, Analyzer, ProductAnalysis};
use async_trait::async_trait;

/// Analyzer that returns a fixed result without any network traffic.
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    analysis: ProductAnalysis,
    fail: bool,
}

impl MockAnalyzer {
    /// Always answer with the given analysis.
    pub fn returning(analysis: ProductAnalysis) -> Self {
        Self {
            analysis,
            fail: false,
        }
    }

    /// Always fail, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            analysis: ProductAnalysis::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, _image_url: &str) -> Result<ProductAnalysis, AiError> {
        if self.fail {
            return Err(AiError::Status {
                code: 503,
                body: "mock failure".to_string(),
            });
        }
        Ok(self.analysis.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_canned_analysis() {
        let analyzer = MockAnalyzer::returning(ProductAnalysis {
            name_en: Some("Boonie Hat".to_string()),
            ..ProductAnalysis::default()
        });

        let analysis = analyzer.analyze("https://img/hat.jpg").await.unwrap();
        assert_eq!(analysis.name_en.as_deref(), Some("Boonie Hat"));
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let analyzer = MockAnalyzer::failing();
        assert!(analyzer.analyze("https://img/hat.jpg").await.is_err());
    }
}
