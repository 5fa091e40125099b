//! Submit Questions use case.
//!
//! Sends a document URL and a comma-separated list of questions to
//! `POST /hackrx/run` and renders the answers.

use super::shared::{SubmissionOutcome, reject, run_with_feedback};
use crate::config::FeedbackSettings;
use crate::ports::backend::QaBackend;
use crate::ports::view::SubmissionView;
use hackrx_domain::SubmissionInputs;
use std::sync::Arc;
use tracing::{debug, info};

/// Raw form fields for [`SubmitQuestionsUseCase`].
#[derive(Debug, Clone)]
pub struct SubmitQuestionsInput {
    /// URL of the document the backend should read.
    pub document_url: String,
    /// Comma-separated questions, e.g. `"What is covered?, Is dental excluded?"`.
    pub questions_text: String,
}

impl SubmitQuestionsInput {
    pub fn new(document_url: impl Into<String>, questions_text: impl Into<String>) -> Self {
        Self {
            document_url: document_url.into(),
            questions_text: questions_text.into(),
        }
    }
}

/// Use case for one question-answering submission.
///
/// 1. Validate both fields (alert and stop if either is empty)
/// 2. Start loading feedback
/// 3. Call the backend once
/// 4. Stop feedback, then render the JSON response or the error
pub struct SubmitQuestionsUseCase {
    backend: Arc<dyn QaBackend>,
    view: Arc<dyn SubmissionView>,
    feedback: FeedbackSettings,
}

impl SubmitQuestionsUseCase {
    pub fn new(backend: Arc<dyn QaBackend>, view: Arc<dyn SubmissionView>) -> Self {
        Self {
            backend,
            view,
            feedback: FeedbackSettings::default(),
        }
    }

    pub fn with_feedback(mut self, feedback: FeedbackSettings) -> Self {
        self.feedback = feedback;
        self
    }

    pub async fn execute(&self, input: SubmitQuestionsInput) -> SubmissionOutcome {
        let inputs = match SubmissionInputs::from_form(&input.document_url, &input.questions_text)
        {
            Ok(inputs) => inputs,
            Err(e) => return reject(self.view.as_ref(), e),
        };

        info!(
            "Submitting {} question(s) about {}",
            inputs.questions.len(),
            inputs.document_url
        );
        debug!("Questions: {:?}", inputs.questions);

        let request = inputs.to_request();
        run_with_feedback(
            &self.view,
            self.feedback,
            "Question run",
            self.backend.run(&request),
        )
        .await
    }
}
