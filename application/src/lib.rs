//! Application layer for hackrx-client
//!
//! This crate contains use cases, port definitions, the loading feedback
//! task and application configuration. It depends only on the domain layer.

pub mod config;
pub mod loading;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::FeedbackSettings;
pub use loading::LoadingIndicator;
pub use ports::{
    backend::{BackendError, CONNECT_FAILURE_MESSAGE, QaBackend},
    view::{NoView, SubmissionView},
};
pub use use_cases::shared::SubmissionOutcome;
pub use use_cases::submit_questions::{SubmitQuestionsInput, SubmitQuestionsUseCase};
pub use use_cases::summarize_clauses::SummarizeClausesUseCase;
pub use use_cases::upload_document::UploadDocumentUseCase;
