//! Loading feedback driven by a single scheduled task.
//!
//! [`LoadingIndicator`] owns the elapsed-seconds ticker and the one-time
//! "still working" transition for one submission. It is released on every
//! exit path: [`LoadingIndicator::finish`] cancels and joins the task, and
//! dropping the indicator aborts it.

use crate::config::FeedbackSettings;
use crate::ports::view::SubmissionView;
use hackrx_domain::LoadingPhase;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Scoped loading feedback for one in-flight request
pub struct LoadingIndicator {
    cancel: CancellationToken,
    handle: Option<JoinHandle<LoadingPhase>>,
    elapsed_secs: Arc<AtomicU64>,
}

impl LoadingIndicator {
    /// Render the "thinking" phase and start ticking.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(view: Arc<dyn SubmissionView>, settings: FeedbackSettings) -> Self {
        view.show_phase(LoadingPhase::Thinking, 0);

        let cancel = CancellationToken::new();
        let elapsed_secs = Arc::new(AtomicU64::new(0));
        let handle = tokio::spawn(drive_feedback(
            view,
            settings,
            cancel.clone(),
            Arc::clone(&elapsed_secs),
        ));

        Self {
            cancel,
            handle: Some(handle),
            elapsed_secs,
        }
    }

    /// Current value of the elapsed counter
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs.load(Ordering::Acquire)
    }

    /// Stop the feedback and return the final elapsed seconds.
    ///
    /// Once this returns the task has exited, so the view receives no
    /// further updates from this indicator.
    pub async fn finish(mut self) -> u64 {
        self.cancel.cancel();

        if let Some(handle) = self.handle.take() {
            match handle.await {
                Ok(mut phase) => {
                    phase.advance(LoadingPhase::Done);
                    debug!("Loading feedback stopped in phase {:?}", phase);
                }
                Err(e) if e.is_panic() => warn!("Loading feedback task panicked: {}", e),
                Err(_) => {}
            }
        }

        self.elapsed_secs()
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Tick loop: advances the counter and performs the phase transition.
///
/// Returns the last phase reached before cancellation.
async fn drive_feedback(
    view: Arc<dyn SubmissionView>,
    settings: FeedbackSettings,
    cancel: CancellationToken,
    elapsed_secs: Arc<AtomicU64>,
) -> LoadingPhase {
    let mut phase = LoadingPhase::Thinking;
    let mut elapsed = Duration::ZERO;

    let mut ticker = tokio::time::interval_at(Instant::now() + settings.tick, settings.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return phase,
            _ = ticker.tick() => {
                elapsed += settings.tick;
                let secs = elapsed.as_secs();
                elapsed_secs.store(secs, Ordering::Release);
                view.update_elapsed(secs);

                if elapsed >= settings.still_working_after
                    && phase.advance(LoadingPhase::StillWorking)
                {
                    view.show_phase(phase, secs);
                }
            }
        }
    }
}
