//! Start-up configuration.
//!
//! Credentials come from any variable lookup; `main` passes the process
//! environment after seeding it from `.env`. They are read exactly once and
//! the resulting [`Config`] is handed to the poller by value.

use std::time::Duration;

use crate::error::{BotError, BotResult};

pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const RETRY_INTERVAL: Duration = Duration::from_secs(600);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Required environment variables, in the order they are checked.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Build a config from an arbitrary variable lookup.
    ///
    /// Absent and empty values are both treated as missing; the error names
    /// the first one in [`REQUIRED_VARS`] order.
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> BotResult<String> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(BotError::Token { name })
        };

        Ok(Self {
            practicum_token: require(REQUIRED_VARS[0])?,
            telegram_token: require(REQUIRED_VARS[1])?,
            telegram_chat_id: require(REQUIRED_VARS[2])?,
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            retry_interval: RETRY_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
        })
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_interval", &self.retry_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_all_credentials_present() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap();

        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_token, "t-token");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.endpoint, PRACTICUM_ENDPOINT);
        assert_eq!(config.retry_interval, Duration::from_secs(600));
    }

    #[test]
    fn test_missing_credential_is_named() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap_err();

        assert!(matches!(err, BotError::Token { name: "TELEGRAM_TOKEN" }));
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "  "),
        ]))
        .unwrap_err();

        assert!(matches!(err, BotError::Token { name: "TELEGRAM_CHAT_ID" }));
    }

    #[test]
    fn test_first_missing_wins() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, BotError::Token { name: "PRACTICUM_TOKEN" }));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "secret-practicum"),
            ("TELEGRAM_TOKEN", "secret-telegram"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-practicum"));
        assert!(!rendered.contains("secret-telegram"));
    }
}
