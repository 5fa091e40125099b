//! Domain error types

use thiserror::Error;

/// Errors raised by the pre-flight validation gate.
///
/// These never reach the backend: the submission is aborted and the
/// message is shown to the user as an alert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a document URL and at least one question.")]
    MissingFields,

    #[error("Please enter at least one clause to summarize.")]
    MissingClauses,

    #[error("Document file not found: {0}")]
    MissingFile(String),
}
