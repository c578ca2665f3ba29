use std::env;
use std::net::SocketAddr;

/// Environment variable holding the classification service base URL.
pub const API_URL_ENV: &str = "SENTIMENT_API_URL";
/// Placeholder base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Address the dashboard binds to by default.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the classification service, without a trailing `/`.
    pub api_url: String,
    pub listen: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            listen: default_listen_addr(),
        }
    }
}

impl DashboardConfig {
    /// Builds a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: resolve_api_url(None),
            ..Self::default()
        }
    }

    pub fn with_api_url(mut self, api_url: impl AsRef<str>) -> Self {
        self.api_url = normalize_base(api_url.as_ref());
        self
    }

    pub fn with_listen(mut self, listen: SocketAddr) -> Self {
        self.listen = listen;
        self
    }
}

/// Resolves the service base URL.
///
/// Order: the explicit value, then `SENTIMENT_API_URL`, then
/// [`DEFAULT_API_URL`]. Empty values count as unset.
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    // 1. Explicit value (CLI flag)
    if let Some(url) = explicit.filter(|url| !url.trim().is_empty()) {
        return normalize_base(url);
    }

    // 2. Environment variable
    if let Ok(url) = env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            return normalize_base(&url);
        }
    }

    // 3. Placeholder
    DEFAULT_API_URL.to_string()
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_matches_constant() {
        assert_eq!(
            DashboardConfig::default().listen,
            DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_explicit_url_wins() {
        assert_eq!(resolve_api_url(Some("http://svc:9000/")), "http://svc:9000");
    }

    #[test]
    fn test_api_url_from_environment() {
        // Kept in one test: the environment is process-wide.
        env::set_var(API_URL_ENV, "http://model-host:8080/");
        assert_eq!(resolve_api_url(None), "http://model-host:8080");
        assert_eq!(resolve_api_url(Some("  ")), "http://model-host:8080");
        assert_eq!(DashboardConfig::from_env().api_url, "http://model-host:8080");

        env::set_var(API_URL_ENV, "");
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);

        env::remove_var(API_URL_ENV);
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_with_api_url_normalizes() {
        let config = DashboardConfig::default().with_api_url("http://a/b/");
        assert_eq!(config.api_url, "http://a/b");
    }
}
