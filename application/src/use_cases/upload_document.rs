//! Upload Document use case.
//!
//! Uploads a local file to `POST /hackrx/upload` so the backend indexes it.

use super::shared::{SubmissionOutcome, reject, run_with_feedback};
use crate::config::FeedbackSettings;
use crate::ports::backend::QaBackend;
use crate::ports::view::SubmissionView;
use hackrx_domain::{UploadReceipt, ValidationError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct UploadDocumentUseCase {
    backend: Arc<dyn QaBackend>,
    view: Arc<dyn SubmissionView>,
    feedback: FeedbackSettings,
}

impl UploadDocumentUseCase {
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

    pub async fn execute(&self, path: &Path) -> SubmissionOutcome {
        let is_file = tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return reject(
                self.view.as_ref(),
                ValidationError::MissingFile(path.display().to_string()),
            );
        }

        info!("Uploading {}", path.display());

        let outcome = run_with_feedback(
            &self.view,
            self.feedback,
            "Upload",
            self.backend.upload(path),
        )
        .await;

        if let SubmissionOutcome::Completed { response, .. } = &outcome
            && let Ok(receipt) = serde_json::from_value::<UploadReceipt>(response.clone())
        {
            info!("Backend indexed document as {}", receipt.doc_id);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingView, Reply, ScriptedBackend, ViewEvent};
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn uploads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Policy text").unwrap();

        let backend = Arc::new(ScriptedBackend::new(Reply::Json(
            json!({"doc_id": "temp_1.txt"}),
        )));
        let view = Arc::new(RecordingView::default());

        let outcome = UploadDocumentUseCase::new(backend.clone(), view.clone())
            .execute(file.path())
            .await;

        assert!(outcome.is_success());
        assert_eq!(
            backend.upload_calls.lock().unwrap().as_slice(),
            &[file.path().to_path_buf()]
        );
    }

    #[tokio::test]
    async fn missing_file_only_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.pdf");

        let backend = Arc::new(ScriptedBackend::new(Reply::Json(json!({}))));
        let view = Arc::new(RecordingView::default());

        let outcome = UploadDocumentUseCase::new(backend.clone(), view.clone())
            .execute(&missing)
            .await;

        assert!(matches!(
            outcome,
            SubmissionOutcome::Rejected(ValidationError::MissingFile(_))
        ));
        assert_eq!(backend.total_calls(), 0);
        assert!(matches!(view.events().as_slice(), [ViewEvent::Alert(_)]));
    }

    #[tokio::test]
    async fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(ScriptedBackend::new(Reply::Json(json!({}))));
        let view = Arc::new(RecordingView::default());

        UploadDocumentUseCase::new(backend.clone(), view.clone())
            .execute(dir.path())
            .await;

        assert_eq!(backend.total_calls(), 0);
    }
}
