//! reqwest-backed [`QaBackend`] adapter
//!
//! Every call is a single request with the bearer token attached. The
//! transport/application split is decided here, once, from the shape of
//! the failure:
//!
//! - the request never completed -> [`BackendError::Transport`]
//! - non-2xx status -> [`BackendError::HttpStatus`] carrying the body text
//! - 2xx with a body that is not JSON -> [`BackendError::Decode`]
//!
//! No timeout is configured: a run can take as long as the backend needs.

use async_trait::async_trait;
use hackrx_application::ports::backend::{BackendError, QaBackend};
use hackrx_domain::{RunRequest, SummarizeRequest};
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, multipart};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const RUN_PATH: &str = "/hackrx/run";
pub const SUMMARIZE_PATH: &str = "/hackrx/summarize";
pub const UPLOAD_PATH: &str = "/hackrx/upload";

const USER_AGENT: &str = concat!("hackrx-client/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the HackRx backend
pub struct HttpQaBackend {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpQaBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url, api_token))
    }

    /// Use an existing client (shared connection pool)
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.endpoint(path))
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, BackendError> {
        debug!("POST {}", self.endpoint(path));
        Self::send(self.post(path).json(body)).await
    }

    async fn send(request: RequestBuilder) -> Result<Value, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!("Response: {} ({} bytes)", status.as_u16(), text.len());

        if !status.is_success() {
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl QaBackend for HttpQaBackend {
    async fn run(&self, request: &RunRequest) -> Result<Value, BackendError> {
        self.post_json(RUN_PATH, request).await
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<Value, BackendError> {
        self.post_json(SUMMARIZE_PATH, request).await
    }

    async fn upload(&self, path: &Path) -> Result<Value, BackendError> {
        let io_error = |e: std::io::Error| BackendError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let bytes = tokio::fs::read(path).await.map_err(io_error)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        debug!(
            "POST {} ({}, {} bytes)",
            self.endpoint(UPLOAD_PATH),
            file_name,
            bytes.len()
        );

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        Self::send(self.post(UPLOAD_PATH).multipart(form)).await
    }
}
