//! Backend endpoint configuration

use std::time::Duration;

/// Default backend base URL
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "TRIAGE_BACKEND_URL";

/// Environment variable overriding the request timeout, in whole seconds
pub const TIMEOUT_ENV: &str = "TRIAGE_TIMEOUT_SECS";

/// Analysis backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL (default: http://127.0.0.1:8000)
    pub base_url: String,
    /// Request timeout (analysis calls wait on a remote model)
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { base_url, timeout }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Request paths are joined with a plain `/`, so the base keeps no
/// trailing slash.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_config_builder() {
        let config = BackendConfig::new()
            .with_base_url("http://10.0.0.5:9000")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = BackendConfig::new().with_base_url("http://127.0.0.1:8000/");
        assert_eq!(config.base_url, "http://127.0.0.1:8000");

        let config = BackendConfig::new().with_base_url("  http://127.0.0.1:8000//  ");
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    // Single test so the env mutations never race each other.
    #[test]
    fn test_from_env() {
        std::env::set_var(BASE_URL_ENV, "http://192.168.1.20:8000/");
        std::env::set_var(TIMEOUT_ENV, "15");
        let config = BackendConfig::from_env();
        assert_eq!(config.base_url, "http://192.168.1.20:8000");
        assert_eq!(config.timeout, Duration::from_secs(15));

        // Garbage timeout falls back to the default.
        std::env::set_var(TIMEOUT_ENV, "soon");
        let config = BackendConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(60));

        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
        let config = BackendConfig::from_env();
        assert_eq!(config, BackendConfig::default());
    }
}
