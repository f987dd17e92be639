//! Gateway configuration and credential material
//!
//! Configuration is an explicit immutable value constructed once at startup
//! and injected into the gateway. Nothing in the call path reads the process
//! environment directly, so tests can fabricate configurations freely.

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://services.ordertime.com/api";

/// Per-probe-call timeout ceiling
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

// ============================================================================
// Credentials
// ============================================================================

/// Read-only snapshot of available credential material.
///
/// Which fields are present determines which authentication candidates exist;
/// absence of a usable combination is detected at first use, not at load time.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Tenant API key
    pub api_key: Option<String>,
    /// Account email (required by some key-based schemes)
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
    /// Developer key (some tenants require this exact header)
    pub dev_key: Option<String>,
    /// Bearer token (token-based tenants)
    pub bearer_token: Option<String>,
}

impl Credentials {
    pub fn has_bearer(&self) -> bool {
        self.bearer_token.is_some()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn has_key_email_dev_key(&self) -> bool {
        self.api_key.is_some() && self.email.is_some() && self.dev_key.is_some()
    }

    pub fn has_key_email_password(&self) -> bool {
        self.api_key.is_some() && self.email.is_some() && self.password.is_some()
    }

    /// True when no authentication scheme has its required fields
    pub fn is_empty(&self) -> bool {
        !self.has_bearer() && !self.has_api_key()
    }
}

// ============================================================================
// Gateway Config
// ============================================================================

/// Complete gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream base URL
    pub base_url: String,
    /// Credential material
    pub credentials: Credentials,
    /// Per-call timeout for probe requests
    pub timeout: Duration,
    /// Log probe attempts and truncated bodies at debug level
    pub debug: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `OT_BASE_URL`, `OT_API_KEY`, `OT_EMAIL`, `OT_PASSWORD`,
    /// `OT_DEVKEY`, `OT_BEARER_TOKEN` and `OT_DEBUG`. This is the only place
    /// in the crate that touches the environment.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials {
            api_key: env_opt("OT_API_KEY"),
            email: env_opt("OT_EMAIL"),
            password: env_opt("OT_PASSWORD"),
            dev_key: env_opt("OT_DEVKEY"),
            bearer_token: env_opt("OT_BEARER_TOKEN"),
        };

        let base_url = env_opt("OT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| Error::config(format!("OT_BASE_URL: {e}")))?;

        let debug = env_opt("OT_DEBUG").is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        Ok(Self {
            base_url,
            credentials,
            timeout: DEFAULT_TIMEOUT,
            debug,
        })
    }

    /// Create a new config builder
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }
}

/// Read an environment variable, treating empty values as absent
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for gateway config, used heavily in tests
#[derive(Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Set the upstream base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.api_key = Some(key.into());
        self
    }

    /// Set the account email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.config.credentials.email = Some(email.into());
        self
    }

    /// Set the account password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.credentials.password = Some(password.into());
        self
    }

    /// Set the developer key
    pub fn dev_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.dev_key = Some(key.into());
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.credentials.bearer_token = Some(token.into());
        self
    }

    /// Set the per-call timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable debug logging of probe attempts
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build the config
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(!config.debug);
        assert!(config.credentials.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = GatewayConfig::builder()
            .base_url("https://tenant.example.com/api")
            .api_key("k-123")
            .email("ops@example.com")
            .password("hunter2")
            .timeout(Duration::from_secs(5))
            .debug(true)
            .build();

        assert_eq!(config.base_url, "https://tenant.example.com/api");
        assert!(config.credentials.has_key_email_password());
        assert!(!config.credentials.has_key_email_dev_key());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.debug);
    }

    #[test]
    fn test_credential_presence_checks() {
        let creds = Credentials {
            api_key: Some("k".to_string()),
            ..Credentials::default()
        };
        assert!(creds.has_api_key());
        assert!(!creds.has_bearer());
        assert!(!creds.has_key_email_dev_key());
        assert!(!creds.is_empty());

        assert!(Credentials::default().is_empty());
    }
}
