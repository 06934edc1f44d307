//! Structured logging for the coach integration
//!
//! Every coach request gets its own `request_id` so interleaved concurrent
//! calls can be told apart in the logs.

use uuid::Uuid;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    AskRequest,
    AskResponse,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::AskRequest => "ask_request",
            LogOperation::AskResponse => "ask_response",
            LogOperation::Config => "config",
        }
    }
}

/// Log configuration load result (never the key itself)
pub fn log_config_loaded(has_api_key: bool) {
    if has_api_key {
        tracing::info!(
            operation = LogOperation::Config.as_str(),
            api_key_present = true,
            "Coach configuration loaded"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Config.as_str(),
            api_key_present = false,
            "Coach API key missing - requests will be rejected by the vendor"
        );
    }
}

/// Log an outbound request
pub fn log_ask_start(request_id: Uuid, model: &str, message_len: usize) {
    tracing::debug!(
        operation = LogOperation::AskRequest.as_str(),
        request_id = %request_id,
        model = model,
        message_len = message_len,
        "Sending coach request"
    );
}

/// Log a successful reply
pub fn log_ask_success(request_id: Uuid, reply_len: usize) {
    tracing::info!(
        operation = LogOperation::AskResponse.as_str(),
        request_id = %request_id,
        reply_len = reply_len,
        "Coach replied"
    );
}

/// Log a success status that carried no content
pub fn log_ask_empty(request_id: Uuid) {
    tracing::warn!(
        operation = LogOperation::AskResponse.as_str(),
        request_id = %request_id,
        "Coach reply had no content"
    );
}

/// Log a failed request (folded into the fallback reply by the caller)
pub fn log_ask_failed(request_id: Uuid, kind: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::AskResponse.as_str(),
        request_id = %request_id,
        error_kind = kind,
        error = error,
        "Coach request failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::AskRequest.as_str(), "ask_request");
        assert_eq!(LogOperation::AskResponse.as_str(), "ask_response");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
