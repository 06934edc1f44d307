//! Fitness coach client
//!
//! `ask` always resolves to displayable text. Transport failures, vendor
//! rejections and malformed bodies are logged and replaced by
//! [`ERROR_REPLY`]; a well-formed reply without content becomes
//! [`NO_ANSWER_REPLY`].

use tracing::Instrument;
use uuid::Uuid;

use super::transport::{ChatTransport, ReqwestTransport};
use crate::config::AiConfig;
use crate::domain::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::shared::constants::{
    CHAT_COMPLETIONS_URL, COACH_MODEL, COACH_PERSONA, ERROR_REPLY, NO_ANSWER_REPLY,
};
use crate::shared::errors::{AskError, Result};
use crate::shared::logging::{log_ask_empty, log_ask_failed, log_ask_start, log_ask_success};

pub struct CoachClient<T = ReqwestTransport> {
    config: AiConfig,
    transport: T,
}

impl CoachClient<ReqwestTransport> {
    pub fn new(config: AiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: ChatTransport> CoachClient<T> {
    pub fn with_transport(config: AiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// System persona followed by the caller's message, verbatim
    pub fn build_request(&self, message: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: COACH_MODEL.to_string(),
            messages: vec![ChatMessage::system(COACH_PERSONA), ChatMessage::user(message)],
        }
    }

    /// Ask the coach. Never fails: see module docs for the fallbacks.
    pub async fn ask(&self, message: &str) -> String {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("coach_ask", request_id = %request_id);

        async move {
            match self.try_ask(request_id, message).await {
                Ok(Some(reply)) => {
                    log_ask_success(request_id, reply.len());
                    reply
                }
                Ok(None) => {
                    log_ask_empty(request_id);
                    NO_ANSWER_REPLY.to_string()
                }
                Err(e) => {
                    log_ask_failed(request_id, e.kind(), &e.to_string());
                    ERROR_REPLY.to_string()
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_ask(&self, request_id: Uuid, message: &str) -> Result<Option<String>> {
        let request = self.build_request(message);
        log_ask_start(request_id, &request.model, message.len());

        let reply = self
            .transport
            .post_chat(CHAT_COMPLETIONS_URL, self.config.api_key(), &request)
            .await?;

        if !reply.is_success() {
            return Err(AskError::Rejected {
                status: reply.status,
                body: reply.body,
            });
        }

        let response: ChatCompletionResponse = serde_json::from_str(&reply.body)?;
        Ok(response.first_content().map(str::to_string))
    }
}
