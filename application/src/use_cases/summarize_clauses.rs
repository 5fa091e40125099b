//! Summarize Clauses use case.
//!
//! Sends comma-separated policy clauses to `POST /hackrx/summarize`.

use super::shared::{SubmissionOutcome, reject, run_with_feedback};
use crate::config::FeedbackSettings;
use crate::ports::backend::QaBackend;
use crate::ports::view::SubmissionView;
use hackrx_domain::ClauseInputs;
use std::sync::Arc;
use tracing::info;

pub struct SummarizeClausesUseCase {
    backend: Arc<dyn QaBackend>,
    view: Arc<dyn SubmissionView>,
    feedback: FeedbackSettings,
}

impl SummarizeClausesUseCase {
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

    pub async fn execute(&self, clauses_text: &str) -> SubmissionOutcome {
        let inputs = match ClauseInputs::from_form(clauses_text) {
            Ok(inputs) => inputs,
            Err(e) => return reject(self.view.as_ref(), e),
        };

        info!("Summarizing {} clause(s)", inputs.clauses.len());

        let request = inputs.to_request();
        run_with_feedback(
            &self.view,
            self.feedback,
            "Clause summary",
            self.backend.summarize(&request),
        )
        .await
    }
}
