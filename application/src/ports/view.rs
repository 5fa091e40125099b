//! Submission view port
//!
//! The single output surface a submission renders into. Implementations
//! live in the presentation layer (spinner, plain text, ...).

use hackrx_domain::LoadingPhase;
use serde_json::Value;

/// Output surface for one submission
pub trait SubmissionView: Send + Sync {
    /// Blocking validation message. Nothing else is rendered afterwards.
    fn alert(&self, message: &str);

    /// Render the status line for a loading phase
    fn show_phase(&self, phase: LoadingPhase, elapsed_secs: u64);

    /// Update the elapsed-seconds display
    fn update_elapsed(&self, elapsed_secs: u64);

    /// Terminal render of a successful response
    fn show_result(&self, response: &Value, elapsed_secs: u64);

    /// Terminal render of a failure
    fn show_error(&self, message: &str);
}

/// No-op view for when nothing should be displayed
pub struct NoView;

impl SubmissionView for NoView {
    fn alert(&self, _message: &str) {}
    fn show_phase(&self, _phase: LoadingPhase, _elapsed_secs: u64) {}
    fn update_elapsed(&self, _elapsed_secs: u64) {}
    fn show_result(&self, _response: &Value, _elapsed_secs: u64) {}
    fn show_error(&self, _message: &str) {}
}
