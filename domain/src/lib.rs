//! Domain layer for hackrx-client
//!
//! This crate contains the submission inputs, the loading phase state and
//! the payloads exchanged with the backend. It has no dependencies on
//! infrastructure or presentation concerns.

pub mod config;
pub mod core;
pub mod payload;
pub mod submission;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{
    error::ValidationError,
    question::{Question, parse_questions, split_list},
};
pub use payload::{RunRequest, SummarizeRequest, UploadReceipt};
pub use submission::{ClauseInputs, LoadingPhase, SubmissionInputs};
