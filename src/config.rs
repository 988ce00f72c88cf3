//! Environment configuration and timeout parsing.

use std::env;
use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;
use crate::openai::{DEFAULT_BASE_URL, OpenAiClient};

/// Environment variable holding the OpenAI API key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable to point the client at a compatible endpoint.
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

/// Default request timeout, in the same notation as `--timeout`.
pub const DEFAULT_TIMEOUT: &str = "5s";

/// Settings sourced from the environment.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
}

impl Settings {
    /// Read settings from `OPENAI_API_KEY` and `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Err(ConfigError::MissingApiKey),
        };

        let base_url = match env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                debug!("Using {} from {}", url, BASE_URL_ENV_VAR);
                url.trim().to_string()
            }
            _ => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self { api_key, base_url })
    }

    pub fn client(&self) -> OpenAiClient {
        OpenAiClient::with_base_url(&self.api_key, &self.base_url)
    }
}

// Keep the key out of logs and panics.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Parse a timeout such as `5s`, `250ms`, `1.5s` or `1m30s`.
///
/// Units are `ms`, `s`, `m` and `h`; every number needs a unit.
pub fn parse_timeout(input: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout(input.to_string());

    let mut rest = input.trim();
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut seconds = 0.0_f64;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        if number_end == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_end].parse().map_err(|_| invalid())?;
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let factor = match &rest[..unit_end] {
            "ms" => 0.001,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_end..];

        seconds += value * factor;
    }

    Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_simple_units() {
        assert_eq!(parse_timeout("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_timeout("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_timeout_compound_and_fractional() {
        assert_eq!(parse_timeout("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_timeout("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_timeout(" 10s ").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_timeout_default_is_valid() {
        assert_eq!(parse_timeout(DEFAULT_TIMEOUT).unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        for bad in ["", "abc", "5", "-1s", "5x", "s", "1..2s", "99999999999999999999999h"] {
            assert_eq!(
                parse_timeout(bad),
                Err(ConfigError::InvalidTimeout(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_settings_missing_key() {
        temp_env::with_var_unset(API_KEY_ENV_VAR, || {
            assert_eq!(Settings::from_env().unwrap_err(), ConfigError::MissingApiKey);
        });
    }

    #[test]
    fn test_settings_empty_key() {
        temp_env::with_var(API_KEY_ENV_VAR, Some("  "), || {
            assert_eq!(Settings::from_env().unwrap_err(), ConfigError::MissingApiKey);
        });
    }

    #[test]
    fn test_settings_from_env() {
        temp_env::with_vars(
            [
                (API_KEY_ENV_VAR, Some("sk-test")),
                (BASE_URL_ENV_VAR, None::<&str>),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.api_key, "sk-test");
                assert_eq!(settings.base_url, DEFAULT_BASE_URL);
            },
        );
    }

    #[test]
    fn test_settings_base_url_override() {
        temp_env::with_vars(
            [
                (API_KEY_ENV_VAR, Some("sk-test")),
                (BASE_URL_ENV_VAR, Some("http://localhost:4000/v1")),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.base_url, "http://localhost:4000/v1");
            },
        );
    }

    #[test]
    fn test_settings_debug_redacts_key() {
        let settings = Settings {
            api_key: "sk-secret".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
