//! Fixed values of the coach integration.

/// Groq's OpenAI-compatible chat-completions endpoint
pub const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model identifier sent with every request (no caller override)
pub const COACH_MODEL: &str = "llama-3.1-8b-instant";

/// Environment variable holding the Groq bearer token
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// System turn sent once per request, never altered by user input
pub const COACH_PERSONA: &str = "Bạn là huấn luyện viên fitness thân thiện, trả lời ngắn gọn, dễ hiểu. \
Luôn trả lời bằng Markdown với danh sách hoặc đoạn văn. \
Mỗi đoạn nên xuống dòng rõ ràng, dễ đọc.";

/// Returned when the vendor answered but carried no message content
pub const NO_ANSWER_REPLY: &str = "Không có câu trả lời.";

/// Returned whenever the call failed, whatever the cause
pub const ERROR_REPLY: &str = "⚠️ Lỗi khi gọi AI.";
