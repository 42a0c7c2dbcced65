//! KYC documents

use super::{get, list, post, put, segment, ListOptions};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `KYC/documents` endpoints across all users
#[derive(Debug, Clone, Copy)]
pub struct KycDocuments<'a> {
    client: &'a MangopayClient,
}

impl<'a> KycDocuments<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List all KYC documents
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "KYC/documents", options).await
    }

    /// Fetch a KYC document
    pub async fn get(&self, document_id: &str) -> Result<Value> {
        get(self.client, &format!("KYC/documents/{}", segment(document_id))).await
    }
}

/// Endpoints of one KYC document, addressed without its owner
#[derive(Debug, Clone)]
pub struct KycDocumentHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> KycDocumentHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Document id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the document
    pub async fn reload(&self) -> Result<Value> {
        KycDocuments::new(self.client).get(&self.id).await
    }
}

/// `users/{id}/KYC/documents` endpoints
#[derive(Debug, Clone)]
pub struct UserKycDocuments<'a> {
    client: &'a MangopayClient,
    user_id: String,
}

impl<'a> UserKycDocuments<'a> {
    pub(crate) fn new(client: &'a MangopayClient, user_id: String) -> Self {
        Self { client, user_id }
    }

    fn path(&self) -> String {
        format!("users/{}/KYC/documents", segment(&self.user_id))
    }

    /// List the user's KYC documents
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, &self.path(), options).await
    }

    /// Fetch one of the user's KYC documents
    pub async fn get(&self, document_id: &str) -> Result<Value> {
        UserKycDocumentHandle::new(self.client, self.user_id.clone(), document_id.to_string())
            .reload()
            .await
    }

    /// Create a KYC document for the user
    pub async fn create(&self, body: Value) -> Result<Value> {
        post(self.client, &self.path(), body).await
    }
}

/// Endpoints of one KYC document of a user
#[derive(Debug, Clone)]
pub struct UserKycDocumentHandle<'a> {
    client: &'a MangopayClient,
    user_id: String,
    id: String,
}

impl<'a> UserKycDocumentHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, user_id: String, id: String) -> Self {
        Self {
            client,
            user_id,
            id,
        }
    }

    /// Document id
    pub fn id(&self) -> &str {
        &self.id
    }

    fn path(&self) -> String {
        format!(
            "users/{}/KYC/documents/{}",
            segment(&self.user_id),
            segment(&self.id)
        )
    }

    /// Fetch the document
    pub async fn reload(&self) -> Result<Value> {
        get(self.client, &self.path()).await
    }

    /// Update the document, typically to ask for validation
    pub async fn update(&self, body: Value) -> Result<Value> {
        put(self.client, &self.path(), Some(body)).await
    }

    /// Add a page to the document; `body` carries the base64 `File`
    pub async fn create_page(&self, body: Value) -> Result<Value> {
        post(self.client, &format!("{}/pages", self.path()), body).await
    }
}
