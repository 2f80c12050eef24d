//! Environment-driven configuration for the store runtime.

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the backend API, e.g. `https://api.example.com/api`.
    pub api_base_url: String,
    /// Optional bearer token attached to every request.
    pub auth_token: Option<String>,
}

impl StoreConfig {
    /// Reads configuration from the environment.
    ///
    /// `API_BASE_URL` is required; `API_AUTH_TOKEN` is optional and enables
    /// the authenticated (admin) endpoints when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url =
            env::var("API_BASE_URL").map_err(|_| ConfigError::MissingEnv("API_BASE_URL"))?;
        let auth_token = env::var("API_AUTH_TOKEN").ok();
        Ok(Self {
            api_base_url,
            auth_token,
        })
    }
}
