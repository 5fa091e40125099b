//! Spinner-based terminal view

use crate::output::console::ResponseFormatter;
use hackrx_application::SubmissionView;
use hackrx_domain::{LoadingPhase, OutputFormat};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde_json::Value;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

struct SpinnerState {
    bar: Option<ProgressBar>,
    phase: LoadingPhase,
    elapsed_secs: u64,
}

/// Renders loading feedback as an indicatif spinner on stderr and the
/// final response on stdout.
pub struct TerminalView {
    format: OutputFormat,
    draw_target: fn() -> ProgressDrawTarget,
    state: Mutex<SpinnerState>,
}

impl TerminalView {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_draw_target(format, ProgressDrawTarget::stderr)
    }

    fn with_draw_target(format: OutputFormat, draw_target: fn() -> ProgressDrawTarget) -> Self {
        Self {
            format,
            draw_target,
            state: Mutex::new(SpinnerState {
                bar: None,
                phase: LoadingPhase::Thinking,
                elapsed_secs: 0,
            }),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn state(&self) -> MutexGuard<'_, SpinnerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn redraw(state: &SpinnerState) {
        if let Some(bar) = &state.bar {
            bar.set_message(ResponseFormatter::format_status(
                state.phase,
                state.elapsed_secs,
            ));
        }
    }

    /// Clear the spinner before a terminal render
    fn clear(&self) {
        let mut state = self.state();
        state.phase.advance(LoadingPhase::Done);
        if let Some(bar) = state.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl SubmissionView for TerminalView {
    fn alert(&self, message: &str) {
        eprintln!("{}", ResponseFormatter::format_alert(message));
    }

    fn show_phase(&self, phase: LoadingPhase, elapsed_secs: u64) {
        let mut state = self.state();
        if state.bar.is_none() {
            let bar = ProgressBar::with_draw_target(None, (self.draw_target)());
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            state.bar = Some(bar);
        }
        state.phase = phase;
        state.elapsed_secs = elapsed_secs;
        Self::redraw(&state);
    }

    fn update_elapsed(&self, elapsed_secs: u64) {
        let mut state = self.state();
        state.elapsed_secs = elapsed_secs;
        Self::redraw(&state);
    }

    fn show_result(&self, response: &Value, elapsed_secs: u64) {
        self.clear();
        println!(
            "{}",
            ResponseFormatter::format_result(response, elapsed_secs, self.format)
        );
    }

    fn show_error(&self, message: &str) {
        self.clear();
        eprintln!("{}", ResponseFormatter::format_error(message));
    }
}
