//! Disputes

use super::{get, list, put, segment, ListOptions};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `disputes` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Disputes<'a> {
    client: &'a MangopayClient,
}

impl<'a> Disputes<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List disputes
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "disputes", options).await
    }

    /// Fetch a dispute
    pub async fn get(&self, dispute_id: &str) -> Result<Value> {
        DisputeHandle::new(self.client, dispute_id.to_string())
            .reload()
            .await
    }

    /// Update a dispute's tag
    pub async fn update(&self, dispute_id: &str, body: Value) -> Result<Value> {
        DisputeHandle::new(self.client, dispute_id.to_string())
            .update(body)
            .await
    }

    /// Accept a dispute without contesting it
    pub async fn close(&self, dispute_id: &str) -> Result<Value> {
        DisputeHandle::new(self.client, dispute_id.to_string())
            .close()
            .await
    }

    /// Contest a dispute, optionally with the contested amount
    pub async fn contest(&self, dispute_id: &str, body: Option<Value>) -> Result<Value> {
        DisputeHandle::new(self.client, dispute_id.to_string())
            .contest(body)
            .await
    }

    /// Resubmit a dispute after its documents were updated
    pub async fn resubmit(&self, dispute_id: &str) -> Result<Value> {
        DisputeHandle::new(self.client, dispute_id.to_string())
            .resubmit()
            .await
    }
}

/// Endpoints of one dispute
#[derive(Debug, Clone)]
pub struct DisputeHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> DisputeHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Dispute id
    pub fn id(&self) -> &str {
        &self.id
    }

    fn path(&self) -> String {
        format!("disputes/{}", segment(&self.id))
    }

    /// Fetch the dispute
    pub async fn reload(&self) -> Result<Value> {
        get(self.client, &self.path()).await
    }

    /// Update the dispute
    pub async fn update(&self, body: Value) -> Result<Value> {
        put(self.client, &self.path(), Some(body)).await
    }

    /// Close the dispute
    pub async fn close(&self) -> Result<Value> {
        put(self.client, &format!("{}/close", self.path()), None).await
    }

    /// Contest the dispute
    pub async fn contest(&self, body: Option<Value>) -> Result<Value> {
        put(self.client, &format!("{}/submit", self.path()), body).await
    }

    /// Resubmit the dispute; same endpoint as contesting, without a body
    pub async fn resubmit(&self) -> Result<Value> {
        put(self.client, &format!("{}/submit", self.path()), None).await
    }
}
