//! Application-level configuration.
//!
//! Controls how the loading feedback behaves while a request is outstanding.

use std::time::Duration;

/// Default delay before the "still working" message replaces "thinking"
pub const DEFAULT_STILL_WORKING_AFTER: Duration = Duration::from_secs(5);

/// Interval of the elapsed-seconds counter
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Loading feedback configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSettings {
    /// How often the elapsed counter is advanced and redrawn.
    pub tick: Duration,
    /// Elapsed time after which the view switches to the "still working" phase.
    pub still_working_after: Duration,
}

impl FeedbackSettings {
    /// Creates settings with the "still working" delay given in seconds.
    pub fn with_still_working_after_seconds(seconds: u64) -> Self {
        Self {
            still_working_after: Duration::from_secs(seconds),
            ..Self::default()
        }
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            tick: TICK_INTERVAL,
            still_working_after: DEFAULT_STILL_WORKING_AFTER,
        }
    }
}
