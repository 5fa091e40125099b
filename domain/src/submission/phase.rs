//! Loading phase value object

use serde::{Deserialize, Serialize};

/// Visual stage of the feedback shown while a request is outstanding.
///
/// Transitions only move forward: `Thinking -> StillWorking -> Done`,
/// and `Thinking -> Done` when the response arrives early.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LoadingPhase {
    #[default]
    Thinking,
    StillWorking,
    Done,
}

impl LoadingPhase {
    /// Move to `next` if it is later than the current phase.
    ///
    /// Returns true when the phase actually changed.
    pub fn advance(&mut self, next: LoadingPhase) -> bool {
        if next > *self {
            *self = next;
            true
        } else {
            false
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, LoadingPhase::Done)
    }

    /// Status line shown for this phase
    pub fn message(&self) -> &'static str {
        match self {
            LoadingPhase::Thinking => "Thinking...",
            LoadingPhase::StillWorking => "Still working... large documents can take a while",
            LoadingPhase::Done => "Done",
        }
    }
}

impl std::fmt::Display for LoadingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_forward() {
        let mut phase = LoadingPhase::Thinking;
        assert!(phase.advance(LoadingPhase::StillWorking));
        assert_eq!(phase, LoadingPhase::StillWorking);
        assert!(phase.advance(LoadingPhase::Done));
        assert!(phase.is_done());
    }

    #[test]
    fn test_advance_never_goes_back() {
        let mut phase = LoadingPhase::Done;
        assert!(!phase.advance(LoadingPhase::StillWorking));
        assert!(!phase.advance(LoadingPhase::Thinking));
        assert_eq!(phase, LoadingPhase::Done);
    }

    #[test]
    fn test_thinking_can_finish_directly() {
        let mut phase = LoadingPhase::default();
        assert!(phase.advance(LoadingPhase::Done));
    }
}
