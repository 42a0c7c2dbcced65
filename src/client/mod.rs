//! Mangopay API client
//!
//! [`MangopayClient`] is cheap to clone; clones share the HTTP connection
//! pool, the bearer token and the schema catalog.
//!
//! # Examples
//!
//! ```no_run
//! use mangopay::{ClientConfig, MangopayClient};
//! use serde_json::json;
//!
//! # async fn example() -> mangopay::Result<()> {
//! let client = MangopayClient::new("my-client-id", "my-api-key", ClientConfig::default())?;
//!
//! let user = client
//!     .users()
//!     .create_natural(json!({
//!         "FirstName": "Ada",
//!         "LastName": "Lovelace",
//!         "Email": "ada@example.com",
//!         "Birthday": "1815-12-10",
//!         "Nationality": "GB",
//!         "CountryOfResidence": "GB"
//!     }))
//!     .await?;
//!
//! let wallets = client.user(user["Id"].as_str().unwrap_or_default()).wallets(None).await?;
//! # let _ = wallets;
//! # Ok(())
//! # }
//! ```

pub mod executor;
pub mod token;


pub use executor::{AuthState, RequestExecutor, RequestOptions, USER_AGENT};
pub use token::{encode_basic_credentials, Credentials, SessionToken};

use crate::resources::{
    CardHandle, CardRegistrationHandle, CardRegistrations, Cards, DisputeHandle, Disputes, Events,
    KycDocumentHandle, KycDocuments, PayInHandle, PayIns, PayOutHandle, PayOuts,
    PreauthorizationHandle, Preauthorizations, RefundHandle, Refunds, TransferHandle, Transfers,
    UserHandle, Users, WalletHandle, Wallets,
};
use crate::schema::SchemaCatalog;
use crate::types::ClientConfig;
use crate::{MangopayError, Result};
use http::Method;
use serde_json::Value;
use std::sync::Arc;

/// Client for the Mangopay REST API
#[derive(Clone)]
pub struct MangopayClient {
    executor: Arc<RequestExecutor>,
    schemas: Arc<SchemaCatalog>,
}

impl std::fmt::Debug for MangopayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MangopayClient")
            .field("executor", &self.executor)
            .field("api_version", &self.schemas.version())
            .finish()
    }
}

impl MangopayClient {
    /// Create a new client
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let http = client_builder
            .build()
            .map_err(|e| MangopayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_http_client(client_id, client_secret, config, http)
    }

    /// Create a client on top of an existing `reqwest::Client`
    ///
    /// The configured timeout is not applied to `http`.
    pub fn with_http_client(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self> {
        config.validate()?;
        let credentials = Credentials::new(client_id, client_secret)?;
        let schemas = SchemaCatalog::for_version(config.api_version);

        tracing::debug!(
            client_id = credentials.client_id(),
            base_url = config.base_url(),
            api_version = %config.api_version,
            "Created Mangopay client"
        );

        Ok(Self {
            executor: Arc::new(RequestExecutor::new(http, config, credentials)),
            schemas: Arc::new(schemas),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Request schemas for the configured API version
    pub fn schemas(&self) -> &SchemaCatalog {
        &self.schemas
    }

    /// Underlying request executor
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Current authentication state
    pub async fn auth_state(&self) -> AuthState {
        self.executor.state().await
    }

    /// Execute a raw call against a path relative to `/{version}/{client_id}/`
    pub async fn execute(&self, method: Method, path: &str, options: RequestOptions) -> Result<Value> {
        self.executor.execute(method, path, options).await
    }

    /// User endpoints
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Endpoints of one user
    pub fn user(&self, id: impl Into<String>) -> UserHandle<'_> {
        UserHandle::new(self, id.into())
    }

    /// Wallet endpoints
    pub fn wallets(&self) -> Wallets<'_> {
        Wallets::new(self)
    }

    /// Endpoints of one wallet
    pub fn wallet(&self, id: impl Into<String>) -> WalletHandle<'_> {
        WalletHandle::new(self, id.into())
    }

    /// Card endpoints
    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    /// Endpoints of one card
    pub fn card(&self, id: impl Into<String>) -> CardHandle<'_> {
        CardHandle::new(self, id.into())
    }

    /// Card registration endpoints
    pub fn card_registrations(&self) -> CardRegistrations<'_> {
        CardRegistrations::new(self)
    }

    /// Endpoints of one card registration
    pub fn card_registration(&self, id: impl Into<String>) -> CardRegistrationHandle<'_> {
        CardRegistrationHandle::new(self, id.into())
    }

    /// Pay-in endpoints
    pub fn pay_ins(&self) -> PayIns<'_> {
        PayIns::new(self)
    }

    /// Endpoints of one pay-in
    pub fn pay_in(&self, id: impl Into<String>) -> PayInHandle<'_> {
        PayInHandle::new(self, id.into())
    }

    /// Pay-out endpoints
    pub fn pay_outs(&self) -> PayOuts<'_> {
        PayOuts::new(self)
    }

    /// Endpoints of one pay-out
    pub fn pay_out(&self, id: impl Into<String>) -> PayOutHandle<'_> {
        PayOutHandle::new(self, id.into())
    }

    /// Transfer endpoints
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(self)
    }

    /// Endpoints of one transfer
    pub fn transfer(&self, id: impl Into<String>) -> TransferHandle<'_> {
        TransferHandle::new(self, id.into())
    }

    /// Refund endpoints
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }

    /// Endpoints of one refund
    pub fn refund(&self, id: impl Into<String>) -> RefundHandle<'_> {
        RefundHandle::new(self, id.into())
    }

    /// Pre-authorization endpoints
    pub fn preauthorizations(&self) -> Preauthorizations<'_> {
        Preauthorizations::new(self)
    }

    /// Endpoints of one pre-authorization
    pub fn preauthorization(&self, id: impl Into<String>) -> PreauthorizationHandle<'_> {
        PreauthorizationHandle::new(self, id.into())
    }

    /// Dispute endpoints
    pub fn disputes(&self) -> Disputes<'_> {
        Disputes::new(self)
    }

    /// Endpoints of one dispute
    pub fn dispute(&self, id: impl Into<String>) -> DisputeHandle<'_> {
        DisputeHandle::new(self, id.into())
    }

    /// KYC document endpoints
    pub fn kyc_documents(&self) -> KycDocuments<'_> {
        KycDocuments::new(self)
    }

    /// Endpoints of one KYC document
    pub fn kyc_document(&self, id: impl Into<String>) -> KycDocumentHandle<'_> {
        KycDocumentHandle::new(self, id.into())
    }

    /// Event endpoints
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }
}
