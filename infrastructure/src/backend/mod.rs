//! HackRx backend adapters

mod http;

pub use http::{HttpQaBackend, RUN_PATH, SUMMARIZE_PATH, UPLOAD_PATH};
