//! Dependency initialization and wiring for the cashback votes client.

use std::env;
use std::time::Duration;

use cashback_votes_api::{HttpVoteApi, VoteApi};
use cashback_votes_engine::Session;
use tracing::{info, warn};

use crate::errors::AppError;

/// Default backend URL.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default HTTP timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Token sent when demo mode is enabled instead of a real session.
const DEMO_ACCESS_TOKEN: &str = "demo-token";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub access_token: Option<String>,
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CASHBACK_API_URL`: Backend URL (default: http://localhost:8000)
    /// - `CASHBACK_ACCESS_TOKEN`: Bearer token of the signed-in user (default: none, anonymous)
    /// - `CASHBACK_DEMO_MODE`: When "true", use the demo token instead of `CASHBACK_ACCESS_TOKEN`
    /// - `CASHBACK_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
    ///
    /// # Returns
    ///
    /// * `Ok(ClientConfig)` - The parsed configuration
    /// * `Err(AppError)` - If `CASHBACK_API_URL` is not an http(s) URL
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = env::var("CASHBACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "CASHBACK_API_URL must start with http:// or https://, got {}",
                api_url
            )));
        }

        let demo_mode = env::var("CASHBACK_DEMO_MODE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let access_token = if demo_mode {
            Some(DEMO_ACCESS_TOKEN.to_string())
        } else {
            env::var("CASHBACK_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty())
        };

        let http_timeout = match env::var("CASHBACK_HTTP_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().unwrap_or_else(|_| {
                warn!(value = %value, "Invalid CASHBACK_HTTP_TIMEOUT_SECS, using default");
                DEFAULT_HTTP_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            access_token,
            http_timeout: Duration::from_secs(http_timeout),
        })
    }

    /// The session implied by the configured token.
    pub fn session(&self) -> Session {
        match &self.access_token {
            Some(token) => Session::authenticated(token.clone()),
            None => Session::Anonymous,
        }
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    pub api: Box<dyn VoteApi>,
    pub session: Session,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    pub fn new() -> Result<Self, AppError> {
        let config = ClientConfig::from_env()?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        info!(
            api_url = %config.api_url,
            authenticated = config.access_token.is_some(),
            http_timeout_secs = config.http_timeout.as_secs(),
            "Initializing dependencies"
        );

        let api = HttpVoteApi::with_timeout(
            &config.api_url,
            config.access_token.clone(),
            config.http_timeout,
        )
        .map_err(|e| AppError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api: Box::new(api),
            session: config.session(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "CASHBACK_API_URL",
        "CASHBACK_ACCESS_TOKEN",
        "CASHBACK_DEMO_MODE",
        "CASHBACK_HTTP_TIMEOUT_SECS",
    ];

    // Helper function to clear environment variables
    fn clear_env_vars() {
        for var in VARS {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env_vars();

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.access_token, None);
        assert_eq!(config.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
        assert_eq!(config.session(), Session::Anonymous);
    }

    #[test]
    #[serial]
    fn test_config_with_token() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_API_URL", "https://api.example.com");
            env::set_var("CASHBACK_ACCESS_TOKEN", "jwt");
            env::set_var("CASHBACK_HTTP_TIMEOUT_SECS", "3");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.session(), Session::authenticated("jwt"));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_demo_mode_overrides_token() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_ACCESS_TOKEN", "jwt");
            env::set_var("CASHBACK_DEMO_MODE", "TRUE");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.access_token.as_deref(), Some(DEMO_ACCESS_TOKEN));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_blank_token_is_anonymous() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_ACCESS_TOKEN", "  ");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.session(), Session::Anonymous);
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_to_default() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_HTTP_TIMEOUT_SECS", "soon");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_api_url() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_API_URL", "localhost:8000");
        }

        let result = ClientConfig::from_env();
        assert!(matches!(result, Err(AppError::Config(_))));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_dependencies_new() {
        clear_env_vars();
        unsafe {
            env::set_var("CASHBACK_ACCESS_TOKEN", "jwt");
        }

        let dependencies = Dependencies::new().unwrap();
        assert!(dependencies.session.is_authenticated());
        clear_env_vars();
    }
}
