//! Client configuration types.

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for the REST client.
///
/// All configuration enters through this value at construction time; there is
/// no ambient or process-wide client state.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Request timeout applied by the transport executor.
    pub timeout: Duration,
    /// Additional attempts after the first failure.
    pub max_retries: u32,
    /// Fixed delay before each re-attempt.
    pub retry_delay: Duration,
    /// Whether the logger interceptor emits records.
    pub logging_enabled: bool,
    /// Headers applied to every request; per-request headers win on conflict.
    pub default_headers: HashMap<String, String>,
    /// API key injected by the auth interceptor, when present.
    pub api_key: Option<String>,
    /// Name of the query parameter carrying the API key.
    pub api_key_param: String,
}

impl NetworkConfig {
    /// Configuration with defaults for everything but the base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder(base_url).build()
    }

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> NetworkConfigBuilder {
        NetworkConfigBuilder::new(base_url)
    }
}

/// Builder for [`NetworkConfig`].
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    base_url: String,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    logging_enabled: Option<bool>,
    default_headers: Option<HashMap<String, String>>,
    api_key: Option<String>,
    api_key_param: Option<String>,
}

impl NetworkConfigBuilder {
    /// Creates a new builder for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            max_retries: None,
            retry_delay: None,
            logging_enabled: None,
            default_headers: None,
            api_key: None,
            api_key_param: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Set the fixed delay between retry attempts.
    #[must_use]
    pub const fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = Some(retry_delay);
        self
    }

    /// Enable or disable request/response logging.
    #[must_use]
    pub const fn logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = Some(enabled);
        self
    }

    /// Replace the default headers.
    #[must_use]
    pub fn default_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Set the API key injected by the auth interceptor.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the query parameter name carrying the API key.
    #[must_use]
    pub fn api_key_param(mut self, name: impl Into<String>) -> Self {
        self.api_key_param = Some(name.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> NetworkConfig {
        NetworkConfig {
            base_url: self.base_url,
            timeout: self.timeout.unwrap_or(Duration::from_secs(5)),
            max_retries: self.max_retries.unwrap_or(3),
            retry_delay: self.retry_delay.unwrap_or(Duration::from_secs(5)),
            logging_enabled: self.logging_enabled.unwrap_or(false),
            default_headers: self.default_headers.unwrap_or_else(|| {
                HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
            }),
            api_key: self.api_key,
            api_key_param: self.api_key_param.unwrap_or_else(|| "key".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NetworkConfig::new("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_secs(5));
        assert!(!config.logging_enabled);
        assert_eq!(
            config.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(config.api_key.is_none());
        assert_eq!(config.api_key_param, "key");
    }

    #[test]
    fn builder_overrides() {
        let config = NetworkConfig::builder("https://api.example.com")
            .timeout(Duration::from_secs(30))
            .max_retries(1)
            .retry_delay(Duration::from_millis(250))
            .logging(true)
            .api_key("secret")
            .api_key_param("api_key")
            .build();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert!(config.logging_enabled);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api_key_param, "api_key");
    }
}
