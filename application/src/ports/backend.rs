//! QA backend port
//!
//! Defines the interface for talking to the HackRx question-answering
//! service. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use hackrx_domain::{RunRequest, SummarizeRequest};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Message shown when the backend cannot be reached at all
pub const CONNECT_FAILURE_MESSAGE: &str = "Could not connect to backend. Is it running?";

/// Errors produced by a backend call.
///
/// The adapter decides the variant once; callers never inspect message text
/// to tell a transport failure from an application failure.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The HTTP exchange could not be completed (connect, DNS, reset)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// A success response whose body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Reading a local file for upload failed
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl BackendError {
    pub fn is_transport(&self) -> bool {
        matches!(self, BackendError::Transport(_))
    }

    /// Text rendered to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Transport(_) => CONNECT_FAILURE_MESSAGE.to_string(),
            BackendError::HttpStatus { status, body } => {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.clone()
                }
            }
            BackendError::Decode(message) => message.clone(),
            BackendError::Io { .. } => self.to_string(),
        }
    }
}

/// Gateway to the HackRx backend
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// `POST /hackrx/run`: answer questions about a document
    async fn run(&self, request: &RunRequest) -> Result<Value, BackendError>;

    /// `POST /hackrx/summarize`: summarize policy clauses
    async fn summarize(&self, request: &SummarizeRequest) -> Result<Value, BackendError>;

    /// `POST /hackrx/upload`: upload a local document for indexing
    async fn upload(&self, path: &Path) -> Result<Value, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_renders_fixed_message() {
        let error = BackendError::Transport("error sending request: connection refused".into());
        assert!(error.is_transport());
        assert_eq!(error.user_message(), CONNECT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_http_status_renders_body() {
        let error = BackendError::HttpStatus {
            status: 500,
            body: "server exploded".into(),
        };
        assert!(!error.is_transport());
        assert_eq!(error.user_message(), "server exploded");
    }

    #[test]
    fn test_http_status_empty_body_falls_back_to_code() {
        let error = BackendError::HttpStatus {
            status: 502,
            body: String::new(),
        };
        assert_eq!(error.user_message(), "HTTP 502");
    }

    #[test]
    fn test_decode_renders_message() {
        let error = BackendError::Decode("expected value at line 1 column 1".into());
        assert_eq!(error.user_message(), "expected value at line 1 column 1");
    }
}
