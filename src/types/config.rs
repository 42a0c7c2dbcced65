//! Client configuration

use super::constants::ApiVersion;
use crate::{MangopayError, Result};
use std::time::Duration;

/// Production API base URL
pub const PRODUCTION_API_URL: &str = "https://api.mangopay.com";
/// Sandbox API base URL
pub const SANDBOX_API_URL: &str = "https://api.sandbox.mangopay.com";

/// Immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit base URL; overrides the sandbox/production choice
    pub api_base_url: Option<String>,
    /// API version used in every path
    pub api_version: ApiVersion,
    /// Target the sandbox environment
    pub sandbox: bool,
    /// Transport-level request timeout
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a sandbox configuration for the default API version
    pub fn new() -> Self {
        Self {
            api_base_url: None,
            api_version: ApiVersion::default(),
            sandbox: true,
            timeout: None,
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self::new().with_sandbox(false)
    }

    /// Override the base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Choose between sandbox and production
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Effective base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        let url = match &self.api_base_url {
            Some(url) => url.as_str(),
            None if self.sandbox => SANDBOX_API_URL,
            None => PRODUCTION_API_URL,
        };
        url.trim_end_matches('/')
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url();
        if base.is_empty() {
            return Err(MangopayError::config("API base URL cannot be empty"));
        }

        let parsed = url::Url::parse(base)
            .map_err(|e| MangopayError::config(format!("Invalid API base URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MangopayError::config(
                "API base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
