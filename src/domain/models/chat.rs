//! Chat-completion request and response bodies (OpenAI-compatible schema)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Only the fields the coach reads; everything else the vendor sends is ignored.
///
/// Any JSON value except `null` is accepted. Missing, `null` or wrongly
/// typed `choices`, choice entries, `message` or `content` all read as
/// absent rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ChatCompletionResponse {
    pub choices: Vec<Option<Choice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl TryFrom<Value> for ChatCompletionResponse {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.is_null() {
            return Err("response body is JSON null".to_string());
        }

        let choices = match value.get("choices") {
            Some(Value::Array(items)) => items.iter().map(Choice::from_value).collect(),
            _ => Vec::new(),
        };
        Ok(Self { choices })
    }
}

impl Choice {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|choice| Self {
            message: choice.get("message").and_then(ChoiceMessage::from_value),
        })
    }
}

impl ChoiceMessage {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|message| Self {
            content: message
                .get("content")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present and non-empty
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(Option::as_ref)
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "hi"}));
    }

    #[test]
    fn test_first_content_reads_first_choice_only() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"A"}},{"message":{"content":"B"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some("A"));
    }

    #[test]
    fn test_first_content_missing_pieces() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":[{"message":{"content":""}}]}"#,
            r#"{"choices":null}"#,
            r#"{"choices":[null]}"#,
            r#"{"choices":[{"message":null}]}"#,
            r#"{"choices":"nope"}"#,
            r#"{"choices":[{"message":"text"}]}"#,
            r#"{"choices":[{"message":{"content":5}}]}"#,
            r#"[1, 2]"#,
            r#""plain string""#,
        ] {
            let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.first_content(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_first_content_skips_trailing_null_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"A"}},null]}"#).unwrap();
        assert_eq!(response.first_content(), Some("A"));
    }

    #[test]
    fn test_null_body_is_rejected() {
        assert!(serde_json::from_str::<ChatCompletionResponse>("null").is_err());
        assert!(serde_json::from_str::<ChatCompletionResponse>("not json").is_err());
    }
}
