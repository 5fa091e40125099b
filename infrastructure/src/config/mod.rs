//! Configuration file loading for hackrx-client
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HACKRX_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./hackrx.toml` or `./.hackrx.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hackrx-client/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileBackendConfig, FileConfig, FileFeedbackConfig,
    FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
