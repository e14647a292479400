//! Backend client configuration.

use std::time::Duration;

/// Connection settings for the hosted backend.
#[derive(Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://shop.example.dev`.
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Create a configuration for a project.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API key (for building request headers).
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::BackendError> {
        if self.base_url.is_empty() || !self.base_url.starts_with("http") {
            return Err(crate::BackendError::Config(format!(
                "invalid base URL: {:?}",
                self.base_url
            )));
        }
        if self.api_key.is_empty() {
            return Err(crate::BackendError::Config("API key is empty".to_string()));
        }
        Ok(())
    }
}

// The API key never appears in logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig::new("https://shop.example.dev/", "key");
        assert_eq!(config.base_url, "https://shop.example.dev");
    }

    #[test]
    fn test_validation() {
        assert!(BackendConfig::new("https://x.dev", "key").validate().is_ok());
        assert!(BackendConfig::new("", "key").validate().is_err());
        assert!(BackendConfig::new("https://x.dev", "").validate().is_err());
    }
}
