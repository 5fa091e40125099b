//! Shared submission flow used by every use case.
//!
//! A submission is: validation gate, loading feedback, one backend call,
//! then exactly one terminal render.

use crate::config::FeedbackSettings;
use crate::loading::LoadingIndicator;
use crate::ports::backend::BackendError;
use crate::ports::view::SubmissionView;
use hackrx_domain::ValidationError;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info};

/// How a submission ended
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Inputs failed validation; the backend was never called
    Rejected(ValidationError),
    /// The backend returned a JSON body on a success status
    Completed { response: Value, elapsed_secs: u64 },
    /// The backend call failed
    Failed {
        error: BackendError,
        elapsed_secs: u64,
    },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Completed { .. })
    }

    pub fn elapsed_secs(&self) -> Option<u64> {
        match self {
            SubmissionOutcome::Rejected(_) => None,
            SubmissionOutcome::Completed { elapsed_secs, .. }
            | SubmissionOutcome::Failed { elapsed_secs, .. } => Some(*elapsed_secs),
        }
    }
}

/// Alert the user and abort. Nothing is logged or rendered besides the alert.
pub(crate) fn reject(view: &dyn SubmissionView, error: ValidationError) -> SubmissionOutcome {
    view.alert(&error.to_string());
    SubmissionOutcome::Rejected(error)
}

/// Await `call` while showing loading feedback, then render the result.
///
/// The indicator is stopped before either terminal render.
pub(crate) async fn run_with_feedback<F>(
    view: &Arc<dyn SubmissionView>,
    feedback: FeedbackSettings,
    label: &str,
    call: F,
) -> SubmissionOutcome
where
    F: Future<Output = Result<Value, BackendError>>,
{
    let indicator = LoadingIndicator::start(Arc::clone(view), feedback);
    let result = call.await;
    let elapsed_secs = indicator.finish().await;

    match result {
        Ok(response) => {
            info!("{} completed in {}s", label, elapsed_secs);
            view.show_result(&response, elapsed_secs);
            SubmissionOutcome::Completed {
                response,
                elapsed_secs,
            }
        }
        Err(e) => {
            error!("{} failed after {}s: {}", label, elapsed_secs, e);
            view.show_error(&e.user_message());
            SubmissionOutcome::Failed {
                error: e,
                elapsed_secs,
            }
        }
    }
}
