//! HTTP client for the backend `/chat` endpoint.

use super::error::FrontendError;
use crate::server::dto::{RestChatRequest, RestChatResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// What the backend sent back, before any rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    Answer(String),
    /// Any non-200 status; the body is kept only for logging
    Status { code: u16, body: String },
    /// 200 whose body is not a `{"response": ...}` object
    InvalidJson { body: String },
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    chat_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FrontendError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FrontendError::Client)?;
        Ok(Self {
            http,
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        })
    }

    pub async fn chat(&self, request: &RestChatRequest) -> Result<BackendReply, FrontendError> {
        debug!(url = self.chat_url.as_str(), model = request.model_name.as_str(), "Posting query to backend");
        let response = self
            .http
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(FrontendError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(FrontendError::Network)?;

        if status.as_u16() != 200 {
            error!(status = status.as_u16(), body = body.as_str(), "Backend returned an error");
            return Ok(BackendReply::Status {
                code: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<RestChatResponse>(&body) {
            Ok(parsed) => Ok(BackendReply::Answer(parsed.response)),
            Err(err) => {
                error!(%err, body = body.as_str(), "Backend returned invalid JSON");
                Ok(BackendReply::InvalidJson { body })
            }
        }
    }
}
