//! Outbound HTTP for the coach

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::domain::models::ChatCompletionRequest;
use crate::shared::errors::{AskError, Result};

/// Raw vendor answer: status plus body text, not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends exactly one chat-completion POST per call
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportReply>;
}

/// reqwest-backed transport; the client pools connections across calls
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatTransport for ReqwestTransport {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportReply> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        Ok(TransportReply { status, body })
    }
}
