//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use ridge_ai::{VisionClient, VisionConfig};
use ridge_backend::{BackendClient, BackendConfig};
use ridge_commerce::money::Currency;

use crate::config::RidgeConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: RidgeConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            RidgeConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<RidgeConfig> {
        let config_names = ["ridge.toml", ".ridge.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = RidgeConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// The shop currency.
    pub fn currency(&self) -> Currency {
        self.config.currency()
    }

    /// Build the backend client from config + environment.
    pub fn client(&self) -> Result<BackendClient> {
        if self.config.backend.url.is_empty() {
            bail!("No backend URL configured. Run `ridge config init` and edit ridge.toml.");
        }
        let api_key = std::env::var(&self.config.backend.api_key_env).with_context(|| {
            format!(
                "API key not found in ${}",
                self.config.backend.api_key_env
            )
        })?;

        let config = BackendConfig::new(&self.config.backend.url, api_key)
            .with_timeout(Duration::from_secs(self.config.backend.timeout_secs));
        Ok(BackendClient::new(config)?)
    }

    /// Build the AI analyzer from config + environment.
    pub fn analyzer(&self) -> Result<VisionClient> {
        if self.config.ai.endpoint.is_empty() {
            bail!("No AI endpoint configured. Set [ai].endpoint in ridge.toml.");
        }
        let api_key = std::env::var(&self.config.ai.api_key_env).with_context(|| {
            format!("AI key not found in ${}", self.config.ai.api_key_env)
        })?;

        let config = VisionConfig::new(&self.config.ai.endpoint, api_key)
            .with_model(&self.config.ai.model);
        Ok(VisionClient::new(config)?)
    }
}
