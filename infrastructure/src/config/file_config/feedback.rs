//! Feedback configuration from TOML (`[feedback]` section)

use hackrx_application::FeedbackSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFeedbackConfig {
    /// Seconds before "thinking" turns into "still working"
    pub still_working_after_secs: u64,
}

impl Default for FileFeedbackConfig {
    fn default() -> Self {
        Self {
            still_working_after_secs: 5,
        }
    }
}

impl FileFeedbackConfig {
    pub fn to_settings(&self) -> FeedbackSettings {
        FeedbackSettings::with_still_working_after_seconds(self.still_working_after_secs)
    }
}
