//! Server-side AI coach: one chat-completion call per user message.

pub mod client;
pub mod transport;

pub use client::CoachClient;
pub use transport::{ChatTransport, ReqwestTransport, TransportReply};

use once_cell::sync::Lazy;

use crate::config::AiConfig;

/// Coach shared by every request; configuration is read on first access
static COACH: Lazy<CoachClient> = Lazy::new(|| {
    let config = AiConfig::from_env();
    crate::shared::logging::log_config_loaded(config.has_api_key());
    CoachClient::new(config)
});

/// Process-wide coach client
pub fn coach() -> &'static CoachClient {
    &COACH
}
