//! CLI configuration.

use anyhow::{Context, Result};
use ridge_commerce::money::Currency;
use serde::{Deserialize, Serialize};

/// CLI configuration file (`ridge.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RidgeConfig {
    /// Hosted backend connection.
    #[serde(default)]
    pub backend: BackendSection,

    /// AI analysis endpoint.
    #[serde(default)]
    pub ai: AiSection,

    /// Shop-level settings.
    #[serde(default)]
    pub shop: ShopSection,
}

impl RidgeConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The shop's currency.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.shop.currency).unwrap_or_default()
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSection {
    /// Project base URL.
    pub url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key_env: "RIDGE_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

/// AI endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSection {
    /// Analysis endpoint URL.
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Model identifier.
    pub model: String,
}

impl Default for AiSection {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key_env: "RIDGE_AI_KEY".to_string(),
            model: "gear-vision-1".to_string(),
        }
    }
}

/// Shop-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    /// ISO currency code.
    pub currency: String,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            currency: "GEL".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = RidgeConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: RidgeConfig = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.backend.api_key_env, "RIDGE_API_KEY");
        assert_eq!(parsed.shop.currency, "GEL");
        assert_eq!(parsed.currency(), Currency::GEL);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: RidgeConfig =
            toml::from_str("[backend]\nurl = \"https://x.dev\"\napi_key_env = \"K\"\ntimeout_secs = 10\n")
                .unwrap();
        assert_eq!(parsed.backend.url, "https://x.dev");
        assert_eq!(parsed.ai.model, "gear-vision-1");
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        let mut config = RidgeConfig::default();
        config.shop.currency = "XYZ".to_string();
        assert_eq!(config.currency(), Currency::GEL);
    }
}
