//! Authenticated request execution
//!
//! The executor owns the bearer token. A token is acquired lazily before the
//! first call, discarded when the API answers 401, and re-acquired once
//! before the call is retried. A second 401 is not retried again; it is
//! classified like any other client error.

use super::token::{request_token, Credentials, SessionToken};
use crate::classifier::classify;
use crate::types::ClientConfig;
use crate::{MangopayError, Result};
use http::Method;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("mangopay-rust/", env!("CARGO_PKG_VERSION"));

/// Authentication state of an executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No usable token
    Unauthenticated,
    /// A token request is in flight
    Authenticating,
    /// A usable token is held
    Authenticated,
}

/// Query string and body of a request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
    /// Value of the `Idempotency-Key` header
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Set an idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Set a random (v4 UUID) idempotency key
    pub fn with_random_idempotency_key(self) -> Self {
        self.with_idempotency_key(uuid::Uuid::new_v4().to_string())
    }
}

/// Executes authenticated calls against the API
pub struct RequestExecutor {
    http: reqwest::Client,
    config: ClientConfig,
    credentials: Credentials,
    token: RwLock<Option<SessionToken>>,
    /// Serializes token acquisition so concurrent callers share one request
    auth_gate: Mutex<()>,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl RequestExecutor {
    /// Create an executor using the given HTTP client
    pub fn new(http: reqwest::Client, config: ClientConfig, credentials: Credentials) -> Self {
        Self {
            http,
            config,
            credentials,
            token: RwLock::new(None),
            auth_gate: Mutex::new(()),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Client id the executor authenticates as
    pub fn client_id(&self) -> &str {
        self.credentials.client_id()
    }

    /// URL of the OAuth token endpoint
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth/token",
            self.config.base_url(),
            self.config.api_version
        )
    }

    /// URL of a resource path
    pub fn resource_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url(),
            self.config.api_version,
            self.credentials.client_id(),
            path.trim_start_matches('/')
        )
    }

    /// Current authentication state
    pub async fn state(&self) -> AuthState {
        if self.current_token().await.is_some() {
            AuthState::Authenticated
        } else if self.auth_gate.try_lock().is_err() {
            AuthState::Authenticating
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Acquire a fresh token now, replacing any held one
    pub async fn authenticate(&self) -> Result<SessionToken> {
        let _gate = self.auth_gate.lock().await;
        self.acquire_locked().await
    }

    /// Drop the held token; the next call re-authenticates
    pub async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    /// Execute an authenticated call and return the parsed body
    pub async fn execute(&self, method: Method, path: &str, options: RequestOptions) -> Result<Value> {
        let token = self.ensure_token().await?;
        let response = self.send(&method, path, &options, &token).await?;

        if response.status() != reqwest::StatusCode::UNAUTHORIZED {
            return self.handle_response(response).await;
        }

        tracing::warn!(%method, path, "Bearer token rejected, re-authenticating");
        self.discard(&token).await;
        let token = self.ensure_token().await?;
        let response = self.send(&method, path, &options, &token).await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, path, "Request still unauthorized after re-authentication");
            self.discard(&token).await;
        }
        self.handle_response(response).await
    }

    #[cfg(test)]
    pub(crate) async fn seed_token(&self, token: SessionToken) {
        *self.token.write().await = Some(token);
    }

    async fn current_token(&self) -> Option<SessionToken> {
        self.token
            .read()
            .await
            .as_ref()
            .filter(|token| !token.is_expired())
            .cloned()
    }

    async fn ensure_token(&self) -> Result<SessionToken> {
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        let _gate = self.auth_gate.lock().await;
        // Another caller may have authenticated while we waited
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }
        self.acquire_locked().await
    }

    /// Caller must hold `auth_gate`
    async fn acquire_locked(&self) -> Result<SessionToken> {
        let token = request_token(&self.http, &self.token_url(), &self.credentials).await?;
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Discard `used` unless it was already replaced by a newer token
    async fn discard(&self, used: &SessionToken) {
        let mut slot = self.token.write().await;
        if slot
            .as_ref()
            .is_some_and(|held| held.access_token() == used.access_token())
        {
            *slot = None;
        }
    }

    async fn send(
        &self,
        method: &Method,
        path: &str,
        options: &RequestOptions,
        token: &SessionToken,
    ) -> Result<reqwest::Response> {
        let url = self.resource_url(path);
        tracing::debug!(%method, %url, "Sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token.access_token())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(key) = &options.idempotency_key {
            request = request.header("Idempotency-Key", key);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        if status >= 500 {
            tracing::error!("Mangopay API returned server error status {}", status);
            return Err(MangopayError::InternalServer { status });
        }

        if status >= 400 {
            let body = serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            tracing::debug!(status, "Mangopay API returned client error");
            return Err(classify(status, &body));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
