//! Wire payloads exchanged with the HackRx backend

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Body of `POST /hackrx/run`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Document URL the backend downloads and indexes
    pub documents: String,
    pub questions: Vec<Question>,
}

/// Body of `POST /hackrx/summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub clauses: Vec<String>,
}

/// Response of `POST /hackrx/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub doc_id: String,
}
