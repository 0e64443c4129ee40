use crate::ValidationError;

/// Environment variable consulted when no base URL is given explicitly.
pub const BASE_URL_ENV: &str = "QUOTEDESK_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the API lives and how long a single request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Validate and normalize an API origin. Trailing slashes are stripped so
    /// endpoint paths can be appended verbatim.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = base_url.as_ref().trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl {
                value: trimmed.to_owned(),
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_owned(),
            timeout_ms: None,
        })
    }

    /// Flag first, then environment, then [`DEFAULT_BASE_URL`].
    pub fn resolve(
        flag: Option<&str>,
        env: Option<&str>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ValidationError> {
        let base_url = flag
            .filter(|value| !value.trim().is_empty())
            .or_else(|| env.filter(|value| !value.trim().is_empty()))
            .unwrap_or(DEFAULT_BASE_URL);

        let mut config = Self::new(base_url)?;
        config.timeout_ms = timeout_ms;
        Ok(config)
    }

    pub fn from_env(flag: Option<&str>, timeout_ms: Option<u64>) -> Result<Self, ValidationError> {
        let env = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(flag, env.as_deref(), timeout_ms)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let config = ClientConfig::resolve(
            Some("https://desk.example.com/"),
            Some("http://env.example.com"),
            None,
        )
        .expect("valid");
        assert_eq!(config.base_url(), "https://desk.example.com");
    }

    #[test]
    fn blank_flag_falls_through_to_environment() {
        let config = ClientConfig::resolve(Some("  "), Some("http://env.example.com"), Some(500))
            .expect("valid");
        assert_eq!(config.base_url(), "http://env.example.com");
        assert_eq!(config.timeout_ms, Some(500));
    }

    #[test]
    fn defaults_to_local_dev_server() {
        let config = ClientConfig::resolve(None, None, None).expect("valid");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.endpoint("/api/test_yfinance"),
            "http://localhost:3000/api/test_yfinance"
        );
    }

    #[test]
    fn rejects_non_http_origin() {
        let err = ClientConfig::new("ftp://example.com").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
    }
}
