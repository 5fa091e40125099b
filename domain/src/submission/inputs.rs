//! Validated submission inputs

use crate::core::error::ValidationError;
use crate::core::question::{Question, parse_questions, split_list};
use crate::payload::{RunRequest, SummarizeRequest};

/// Inputs for one question-answering submission.
///
/// Built from the two raw text fields. Only emptiness is checked: the
/// document URL is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInputs {
    pub document_url: String,
    pub questions: Vec<Question>,
}

impl SubmissionInputs {
    /// Validate the raw fields and parse the question list.
    pub fn from_form(document_url: &str, questions_text: &str) -> Result<Self, ValidationError> {
        if document_url.is_empty() || questions_text.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self {
            document_url: document_url.to_string(),
            questions: parse_questions(questions_text),
        })
    }

    /// Build the `/hackrx/run` request body.
    pub fn to_request(&self) -> RunRequest {
        RunRequest {
            documents: self.document_url.clone(),
            questions: self.questions.clone(),
        }
    }
}

/// Inputs for a clause summarization submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseInputs {
    pub clauses: Vec<String>,
}

impl ClauseInputs {
    pub fn from_form(clauses_text: &str) -> Result<Self, ValidationError> {
        let clauses = split_list(clauses_text);
        if clauses.is_empty() {
            return Err(ValidationError::MissingClauses);
        }
        Ok(Self { clauses })
    }

    pub fn to_request(&self) -> SummarizeRequest {
        SummarizeRequest {
            clauses: self.clauses.clone(),
        }
    }
}
