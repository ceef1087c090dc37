//! Client configuration: the API base URL, the gateway it is resolved
//! against, and the request timeout. Values are built once at start-up and
//! handed to [`crate::client::ApiClient`]; nothing here is global.

use crate::client::ApiError;
use std::time::Duration;
use url::{ParseError, Url};

/// Base URL used when no override is supplied. Relative, so calls go through
/// the gateway in front of the backend.
pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Origin a relative base URL is resolved against.
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5000";
/// Default request timeout (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub gateway_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// Externally injected values; blank strings count as absent.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub gateway_url: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Applies overrides on top of the defaults.
    #[must_use]
    pub fn load(overrides: Overrides) -> Self {
        let mut config = Self::default();
        apply_overrides(&mut config, overrides);
        config
    }

    /// Resolves the configured base URL to an absolute URL.
    ///
    /// A relative base (the default `/api`) is joined onto the gateway URL the
    /// same way a browser joins a relative URL onto the page origin.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if either URL cannot be parsed.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        match Url::parse(self.api_base_url.trim()) {
            Ok(url) => Ok(url),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let gateway = Url::parse(self.gateway_url.trim()).map_err(|err| {
                    ApiError::Config(format!("Invalid gateway URL {}: {err}", self.gateway_url))
                })?;
                gateway.join(self.api_base_url.trim()).map_err(|err| {
                    ApiError::Config(format!(
                        "Invalid API base URL {}: {err}",
                        self.api_base_url
                    ))
                })
            }
            Err(err) => Err(ApiError::Config(format!(
                "Invalid API base URL {}: {err}",
                self.api_base_url
            ))),
        }
    }
}

fn apply_overrides(config: &mut ClientConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url.as_deref().and_then(normalize_value) {
        config.api_base_url = value;
    }
    if let Some(value) = overrides.gateway_url.as_deref().and_then(normalize_value) {
        config.gateway_url = value;
    }
    if let Some(value) = overrides.request_timeout {
        config.request_timeout = value;
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://users.example "),
            Some("https://users.example".to_string())
        );
    }

    #[test]
    fn load_without_overrides_uses_relative_api_path() {
        let config = ClientConfig::load(Overrides::default());
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn load_ignores_blank_overrides() {
        let config = ClientConfig::load(Overrides {
            api_base_url: Some("  ".to_string()),
            gateway_url: Some(String::new()),
            request_timeout: None,
        });
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn load_applies_present_overrides() {
        let config = ClientConfig::load(Overrides {
            api_base_url: Some("https://api.override/v2".to_string()),
            gateway_url: Some("http://gateway.override".to_string()),
            request_timeout: Some(Duration::from_secs(2)),
        });
        assert_eq!(config.api_base_url, "https://api.override/v2");
        assert_eq!(config.gateway_url, "http://gateway.override");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn relative_base_resolves_against_gateway() -> Result<(), ApiError> {
        let config = ClientConfig {
            gateway_url: "http://gateway.local:8080/some/page".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.base_url()?.as_str(), "http://gateway.local:8080/api");
        Ok(())
    }

    #[test]
    fn absolute_base_ignores_gateway() -> Result<(), ApiError> {
        let config = ClientConfig {
            api_base_url: "https://users.example/api".to_string(),
            gateway_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.base_url()?.as_str(), "https://users.example/api");
        Ok(())
    }

    #[test]
    fn invalid_gateway_is_a_config_error() {
        let config = ClientConfig {
            gateway_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.base_url(), Err(ApiError::Config(_))));
    }
}
