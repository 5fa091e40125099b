//! Use cases (application services)

pub mod shared;
pub mod submit_questions;
pub mod summarize_clauses;
pub mod upload_document;
