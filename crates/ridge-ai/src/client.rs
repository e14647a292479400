//! HTTP implementation of the analyzer.

use crate::{AiError, Analyzer, ProductAnalysis};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the vision inference endpoint.
#[derive(Clone)]
pub struct VisionConfig {
    /// Full URL of the analysis endpoint.
    pub endpoint: String,
    /// Bearer key for the endpoint.
    api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Request timeout. Vision calls are slow; default is 60s.
    pub timeout: Duration,
}

impl VisionConfig {
    /// Create a configuration for an endpoint.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: "gear-vision-1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The API key never appears in logs.
impl std::fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    model: &'a str,
    image_url: &'a str,
}

/// Analyzer backed by the hosted vision endpoint.
///
/// One image per request, fire-and-await, no retries: a failed analysis is
/// reported to the operator, who re-triggers it by hand.
pub struct VisionClient {
    http: Client,
    config: VisionConfig,
}

impl VisionClient {
    /// Build a client from the configuration.
    pub fn new(config: VisionConfig) -> Result<Self, AiError> {
        if config.endpoint.is_empty() || !config.endpoint.starts_with("http") {
            return Err(AiError::Config(format!(
                "invalid endpoint: {:?}",
                config.endpoint
            )));
        }
        if config.api_key.is_empty() {
            return Err(AiError::Config("API key is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|e| AiError::Config(e.to_string()))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AiError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl Analyzer for VisionClient {
    async fn analyze(&self, image_url: &str) -> Result<ProductAnalysis, AiError> {
        debug!(image_url, model = %self.config.model, "requesting analysis");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&AnalyzeRequest {
                model: &self.config.model,
                image_url,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(code = status.as_u16(), body, "analysis failed");
            return Err(AiError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let analysis: ProductAnalysis = response
            .json()
            .await
            .map_err(|e| AiError::Decode(e.to_string()))?;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_config() {
        assert!(VisionClient::new(VisionConfig::new("", "key")).is_err());
        assert!(VisionClient::new(VisionConfig::new("https://ai.example.dev/analyze", "")).is_err());
        assert!(VisionClient::new(VisionConfig::new("https://ai.example.dev/analyze", "key")).is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = VisionConfig::new("https://ai.example.dev/analyze", "key")
            .with_model("gear-vision-2")
            .with_timeout(Duration::from_secs(10));
        assert_eq!(config.model, "gear-vision-2");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
