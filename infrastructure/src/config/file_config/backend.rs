//! Backend configuration from TOML (`[backend]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the HackRx service, without the `/hackrx/...` path
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header
    pub api_token: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
        }
    }
}

impl FileBackendConfig {
    /// The configured token, treating a blank value as unset
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedScheme(url.to_string()));
        }
        if self.token().is_none() {
            return Err(ConfigValidationError::MissingToken);
        }
        Ok(())
    }
}
