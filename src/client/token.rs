//! Client credentials and OAuth bearer tokens

use crate::{MangopayError, Result};
use base64::Engine;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Tokens are considered expired this long before the server says so
const EXPIRY_SKEW: Duration = Duration::from_secs(10);

/// OAuth client credentials
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(MangopayError::config(
                "Please specify mangopay client id and client secret",
            ));
        }
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Client id, also used as a path segment of resource URLs
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Value of the `Authorization` header for the token endpoint
    pub fn basic_authorization(&self) -> String {
        encode_basic_credentials(&self.client_id, &self.client_secret)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Encode client credentials as HTTP Basic auth header value.
/// Returns `Basic <base64(client_id:client_secret)>`.
pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{client_id}:{client_secret}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {encoded}")
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// A bearer token obtained through the client-credentials grant
#[derive(Clone)]
pub struct SessionToken {
    access_token: String,
    token_type: String,
    expires_at: Option<Instant>,
}

impl SessionToken {
    pub(crate) fn new(access_token: impl Into<String>, expires_in: Option<Duration>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_at: expires_in.map(|d| Instant::now() + d),
        }
    }

    /// Raw bearer value
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token type as reported by the server
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Whether the server-announced lifetime has (almost) elapsed
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Instant::now() + EXPIRY_SKEW >= at,
            None => false,
        }
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Request a bearer token from the OAuth endpoint
pub(crate) async fn request_token(
    http: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<SessionToken> {
    tracing::debug!("Requesting bearer token from {}", token_url);

    let response = http
        .post(token_url)
        .header(reqwest::header::AUTHORIZATION, credentials.basic_authorization())
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 {
        tracing::error!("Token endpoint refused authentication with status {}", status);
        return Err(MangopayError::Connection { status });
    }

    let body: TokenResponse = response.json().await.map_err(|e| {
        tracing::error!("Token endpoint returned an unreadable body: {}", e);
        MangopayError::Connection { status }
    })?;

    let mut token = SessionToken::new(body.access_token, body.expires_in.map(Duration::from_secs));
    if let Some(token_type) = body.token_type {
        token.token_type = token_type;
    }
    tracing::debug!(expires_in = ?body.expires_in, "Bearer token acquired");

    Ok(token)
}
