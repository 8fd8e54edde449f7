//! # Configuration Module
//!
//! Settings read once at startup from the process environment (and an
//! optional `.env` file). The chat token and catalog API key are mandatory;
//! the bot refuses to start without them.

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CATALOG_API_URL: &str = "https://api.kinopoisk.dev/v1.4/movie";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LANGUAGE: &str = "ru";

/// Errors raised while loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Bot configuration
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Telegram bot access token
    pub telegram_bot_token: String,
    /// Kinopoisk API key sent with every catalog request
    pub kinopoisk_api_key: String,
    /// Movie search endpoint of the catalog
    pub catalog_api_url: String,
    /// Upper bound for a single catalog request
    pub catalog_timeout: Duration,
    /// Language used when the user's language is unknown or unsupported
    pub default_language: String,
}

impl BotConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let telegram_bot_token = get("TELEGRAM_BOT_TOKEN")
            .or_else(|| get("BOT_TOKEN"))
            .ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        let kinopoisk_api_key =
            get("KINOPOISK_API_KEY").ok_or(ConfigError::Missing("KINOPOISK_API_KEY"))?;

        let catalog_api_url =
            get("KINOPOISK_API_URL").unwrap_or_else(|| DEFAULT_CATALOG_API_URL.to_string());

        let timeout_secs = match get("CATALOG_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "CATALOG_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got '{raw}'"),
                    })
                }
            },
            None => DEFAULT_CATALOG_TIMEOUT_SECS,
        };

        let default_language = get("BOT_DEFAULT_LANGUAGE")
            .map(|lang| lang.to_lowercase())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            telegram_bot_token,
            kinopoisk_api_key,
            catalog_api_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            default_language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = BotConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("KINOPOISK_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(config.telegram_bot_token, "123:abc");
        assert_eq!(config.kinopoisk_api_key, "key");
        assert_eq!(config.catalog_api_url, DEFAULT_CATALOG_API_URL);
        assert_eq!(config.catalog_timeout, Duration::from_secs(10));
        assert_eq!(config.default_language, "ru");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = BotConfig::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("KINOPOISK_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let result = BotConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("KINOPOISK_API_KEY", "   "),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("KINOPOISK_API_KEY"));
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let result = BotConfig::from_lookup(lookup(&[("KINOPOISK_API_KEY", "key")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_bot_token_fallback() {
        let config = BotConfig::from_lookup(lookup(&[
            ("BOT_TOKEN", "456:def"),
            ("KINOPOISK_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.telegram_bot_token, "456:def");
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("KINOPOISK_API_KEY", "key"),
            ("KINOPOISK_API_URL", "http://localhost:8080/movie"),
            ("CATALOG_TIMEOUT_SECS", "3"),
            ("BOT_DEFAULT_LANGUAGE", "EN"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_api_url, "http://localhost:8080/movie");
        assert_eq!(config.catalog_timeout, Duration::from_secs(3));
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["0", "soon", "-5"] {
            let result = BotConfig::from_lookup(lookup(&[
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("KINOPOISK_API_KEY", "key"),
                ("CATALOG_TIMEOUT_SECS", raw),
            ]));
            assert!(matches!(
                result,
                Err(ConfigError::Invalid {
                    name: "CATALOG_TIMEOUT_SECS",
                    ..
                })
            ));
        }
    }
}
