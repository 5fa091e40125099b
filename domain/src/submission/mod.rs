//! Submission domain: what the user typed and how the wait is presented

pub mod inputs;
pub mod phase;

pub use inputs::{ClauseInputs, SubmissionInputs};
pub use phase::LoadingPhase;
