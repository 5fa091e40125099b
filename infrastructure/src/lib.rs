//! Infrastructure layer for hackrx-client
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::HttpQaBackend;
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileFeedbackConfig,
    FileOutputConfig,
};
