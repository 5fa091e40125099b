//! Test doubles shared by the use case and loading tests

use crate::ports::backend::{BackendError, QaBackend};
use crate::ports::view::SubmissionView;
use async_trait::async_trait;
use hackrx_domain::{LoadingPhase, RunRequest, SummarizeRequest};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// Everything a view was asked to render, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Alert(String),
    Phase(LoadingPhase, u64),
    Elapsed(u64),
    Result(Value, u64),
    Error(String),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl SubmissionView for RecordingView {
    fn alert(&self, message: &str) {
        self.push(ViewEvent::Alert(message.to_string()));
    }

    fn show_phase(&self, phase: LoadingPhase, elapsed_secs: u64) {
        self.push(ViewEvent::Phase(phase, elapsed_secs));
    }

    fn update_elapsed(&self, elapsed_secs: u64) {
        self.push(ViewEvent::Elapsed(elapsed_secs));
    }

    fn show_result(&self, response: &Value, elapsed_secs: u64) {
        self.push(ViewEvent::Result(response.clone(), elapsed_secs));
    }

    fn show_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }
}

/// Canned backend behaviour
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
    Transport,
    Decode,
}

impl Reply {
    fn build(&self) -> Result<Value, BackendError> {
        match self {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status, body) => Err(BackendError::HttpStatus {
                status: *status,
                body: body.clone(),
            }),
            Reply::Transport => Err(BackendError::Transport(
                "error sending request for url (http://localhost:8000/hackrx/run)".into(),
            )),
            Reply::Decode => Err(BackendError::Decode(
                "expected value at line 1 column 1".into(),
            )),
        }
    }
}

/// Backend that records every call and answers after `delay`
pub struct ScriptedBackend {
    reply: Reply,
    delay: Duration,
    pub run_calls: Mutex<Vec<RunRequest>>,
    pub summarize_calls: Mutex<Vec<SummarizeRequest>>,
    pub upload_calls: Mutex<Vec<PathBuf>>,
}

impl ScriptedBackend {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            run_calls: Mutex::new(Vec::new()),
            summarize_calls: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn total_calls(&self) -> usize {
        self.run_calls.lock().unwrap().len()
            + self.summarize_calls.lock().unwrap().len()
            + self.upload_calls.lock().unwrap().len()
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl QaBackend for ScriptedBackend {
    async fn run(&self, request: &RunRequest) -> Result<Value, BackendError> {
        self.run_calls.lock().unwrap().push(request.clone());
        self.wait().await;
        self.reply.build()
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<Value, BackendError> {
        self.summarize_calls.lock().unwrap().push(request.clone());
        self.wait().await;
        self.reply.build()
    }

    async fn upload(&self, path: &Path) -> Result<Value, BackendError> {
        self.upload_calls.lock().unwrap().push(path.to_path_buf());
        self.wait().await;
        self.reply.build()
    }
}
