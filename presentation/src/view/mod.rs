//! [`SubmissionView`](hackrx_application::SubmissionView) implementations

pub mod plain;
pub mod terminal;
