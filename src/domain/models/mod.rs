// Chat-completion wire types
pub mod chat;

pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage, Role};
