//! Process-wide coach configuration, read once at startup.

use std::fmt;

use crate::shared::constants::API_KEY_ENV;

/// Read-only configuration handed to the coach client at construction
#[derive(Clone, Default)]
pub struct AiConfig {
    api_key: String,
}

impl AiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Load from the process environment, after merging a `.env` file if any
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup. A missing key is kept as empty:
    /// the vendor's rejection surfaces through the normal failure path.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_ENV)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
        Self { api_key }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_reads_groq_key() {
        let config = AiConfig::from_lookup(|key| {
            (key == "GROQ_API_KEY").then(|| " gsk_test \n".to_string())
        });
        assert_eq!(config.api_key(), "gsk_test");
        assert!(config.has_api_key());
    }

    #[test]
    fn test_missing_key_is_empty_not_error() {
        let config = AiConfig::from_lookup(|_| None);
        assert_eq!(config.api_key(), "");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", AiConfig::new("gsk_secret"));
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
