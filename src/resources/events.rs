//! Events

use super::{list, ListOptions};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `events` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a MangopayClient,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List events, usually filtered by `EventType`, `BeforeDate` and
    /// `AfterDate`
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "events", options).await
    }
}
