//! Environment-driven bot configuration.

use pencari_error::{ConfigError, PencariResult};
use pencari_search::Credentials;

const DEFAULT_RESULTS_PER_PAGE: usize = 5;

/// Runtime configuration for the bot process.
///
/// Read from the environment (a `.env` file is honored via dotenvy
/// before this runs):
/// - `BOT_TOKEN` — required; without it the process logs a diagnostic
///   and does not start
/// - `API_URL` — required; the WordPress REST endpoint to search
/// - `API_USER` / `API_PASS` — optional pair enabling basic auth
/// - `RESULTS_PER_PAGE` — positive integer, default 5
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct BotConfig {
    /// Telegram bot token
    bot_token: String,
    /// Remote search API endpoint
    api_url: String,
    /// Optional basic-auth credentials for the search API
    credentials: Option<Credentials>,
    /// Page size for result display
    results_per_page: usize,
}

impl BotConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `BOT_TOKEN` or `API_URL` is
    /// missing, or when `RESULTS_PER_PAGE` is not a positive integer.
    pub fn from_env() -> PencariResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`BotConfig::from_env`] so tests can supply values
    /// without mutating process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PencariResult<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::new("BOT_TOKEN not set"))?;
        let api_url = lookup("API_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::new("API_URL not set"))?;

        // Auth is enabled only when both halves are present.
        let credentials = match (lookup("API_USER"), lookup("API_PASS")) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some(Credentials::new(user, pass))
            }
            _ => None,
        };

        let results_per_page = match lookup("RESULTS_PER_PAGE") {
            None => DEFAULT_RESULTS_PER_PAGE,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::new(format!(
                        "RESULTS_PER_PAGE must be a positive integer, got '{raw}'"
                    ))
                    .into());
                }
            },
        };

        Ok(Self {
            bot_token,
            api_url,
            credentials,
            results_per_page,
        })
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn minimal_config_defaults_page_size() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "123:abc"),
            ("API_URL", "https://example.com/wp-json/wp/v2/posts"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token(), "123:abc");
        assert_eq!(*config.results_per_page(), 5);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn missing_bot_token_is_an_error() {
        let result = BotConfig::from_lookup(lookup_from(&[("API_URL", "https://example.com")]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_bot_token_is_an_error() {
        let result = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", ""),
            ("API_URL", "https://example.com"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn missing_api_url_is_an_error() {
        let result = BotConfig::from_lookup(lookup_from(&[("BOT_TOKEN", "123:abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn credentials_require_both_halves() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "123:abc"),
            ("API_URL", "https://example.com"),
            ("API_USER", "admin"),
        ]))
        .unwrap();
        assert!(config.credentials().is_none());

        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "123:abc"),
            ("API_URL", "https://example.com"),
            ("API_USER", "admin"),
            ("API_PASS", "secret"),
        ]))
        .unwrap();
        let credentials = config.credentials().as_ref().unwrap();
        assert_eq!(credentials.user(), "admin");
        assert_eq!(credentials.pass(), "secret");
    }

    #[test]
    fn page_size_must_be_positive_integer() {
        for bad in ["0", "-1", "lima", "5.5", ""] {
            let result = BotConfig::from_lookup(lookup_from(&[
                ("BOT_TOKEN", "123:abc"),
                ("API_URL", "https://example.com"),
                ("RESULTS_PER_PAGE", bad),
            ]));
            assert!(result.is_err(), "accepted RESULTS_PER_PAGE={bad}");
        }

        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "123:abc"),
            ("API_URL", "https://example.com"),
            ("RESULTS_PER_PAGE", "10"),
        ]))
        .unwrap();
        assert_eq!(*config.results_per_page(), 10);
    }
}
