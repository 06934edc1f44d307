use thiserror::Error;

/// Failures of a single coach request.
///
/// None of these reach the caller of `CoachClient::ask`: they are logged and
/// folded into the fallback reply.
#[derive(Debug, Error)]
pub enum AskError {
    /// The request never reached the vendor or no response came back
    #[error("Transport error: {0}")]
    Transport(String),

    /// The vendor answered with a non-success status
    #[error("Vendor rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Success status but the body is not the expected JSON
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl AskError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            AskError::Transport(_) => "transport",
            AskError::Rejected { .. } => "rejected",
            AskError::Malformed(_) => "malformed",
        }
    }
}

pub type Result<T> = std::result::Result<T, AskError>;
