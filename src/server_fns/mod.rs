//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::shared::constants::NO_ANSWER_REPLY;

/// Local answer for messages not worth a vendor call (whitespace only)
pub fn blank_reply(message: &str) -> Option<String> {
    message
        .trim()
        .is_empty()
        .then(|| NO_ANSWER_REPLY.to_string())
}

/// Forward one message to the fitness coach.
///
/// Always `Ok`: failures are folded into the fallback reply on the server,
/// and the API key never reaches the browser.
#[server]
pub async fn ask_coach(message: String) -> Result<String, ServerFnError> {
    use crate::ai::coach;

    if let Some(reply) = blank_reply(&message) {
        tracing::debug!("ask_coach called with blank message, skipping vendor call");
        return Ok(reply);
    }

    Ok(coach().ask(&message).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_messages_answered_locally() {
        assert_eq!(blank_reply("").as_deref(), Some(NO_ANSWER_REPLY));
        assert_eq!(blank_reply("  \n").as_deref(), Some(NO_ANSWER_REPLY));
        assert_eq!(blank_reply("\t").as_deref(), Some(NO_ANSWER_REPLY));
    }

    #[test]
    fn test_non_blank_message_goes_to_vendor() {
        assert_eq!(blank_reply(" a "), None);
        assert_eq!(blank_reply("squat?"), None);
    }
}
