//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod feedback;
mod output;

pub use backend::{DEFAULT_BASE_URL, FileBackendConfig};
pub use feedback::FileFeedbackConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems that make a loaded configuration unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.base_url is empty")]
    EmptyBaseUrl,

    #[error("backend.base_url must start with http:// or https:// (got '{0}')")]
    UnsupportedScheme(String),

    #[error(
        "No API token configured. Pass --token, set HACKRX_BACKEND__API_TOKEN, or add api_token under [backend]"
    )]
    MissingToken,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint and credentials
    pub backend: FileBackendConfig,
    /// Loading feedback timing
    pub feedback: FileFeedbackConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the settings needed to talk to the backend.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.backend.validate()
    }
}
