//! Resource namespaces and id-bound handles
//!
//! Namespaces (`client.users()`) expose collection endpoints. Handles
//! (`client.user(id)`) borrow the client together with an entity id and
//! expose the endpoints of that entity. Responses are returned as JSON
//! values exactly as the API sends them.

pub mod cards;
pub mod disputes;
pub mod events;
pub mod kyc;
pub mod payments;
pub mod users;
pub mod wallets;

#[cfg(test)]
mod tests;

pub use cards::{CardHandle, CardRegistrationHandle, CardRegistrations, Cards};
pub use disputes::{DisputeHandle, Disputes};
pub use events::Events;
pub use kyc::{KycDocumentHandle, KycDocuments, UserKycDocumentHandle, UserKycDocuments};
pub use payments::{
    PayInHandle, PayIns, PayOutHandle, PayOuts, PreauthorizationHandle, Preauthorizations,
    RefundHandle, Refunds, TransferHandle, Transfers,
};
pub use users::{BankAccounts, UserHandle, Users};
pub use wallets::{WalletHandle, Wallets};

use crate::client::{MangopayClient, RequestOptions};
use crate::schema::{validate, Schema};
use crate::Result;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::collections::BTreeMap;

/// Characters escaped in path segments
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Pagination, sorting and filters of list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Sort expression such as `CreationDate:DESC`
    pub sort: Option<String>,
    /// Additional filters, sent as query parameters
    pub filters: BTreeMap<String, String>,
}

impl ListOptions {
    /// Options with no pagination or filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the sort expression
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Add a filter
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Query parameters for these options
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("Sort".to_string(), sort.clone()));
        }
        query.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        query
    }
}

/// Escape an id for use as a path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Validate a body, returning the normalized copy to send
pub(crate) fn validated(body: &Value, schema: &Schema) -> Result<Value> {
    validate(body, schema).map_err(|e| {
        tracing::debug!(violations = e.violations.len(), "Request body rejected before sending");
        e.into()
    })
}

pub(crate) async fn get(client: &MangopayClient, path: &str) -> Result<Value> {
    client.execute(Method::GET, path, RequestOptions::new()).await
}

pub(crate) async fn list(
    client: &MangopayClient,
    path: &str,
    options: Option<&ListOptions>,
) -> Result<Value> {
    let query = options.map(ListOptions::to_query).unwrap_or_default();
    client
        .execute(Method::GET, path, RequestOptions::new().with_query(query))
        .await
}

pub(crate) async fn post(client: &MangopayClient, path: &str, body: Value) -> Result<Value> {
    client
        .execute(Method::POST, path, RequestOptions::new().with_body(body))
        .await
}

pub(crate) async fn put(client: &MangopayClient, path: &str, body: Option<Value>) -> Result<Value> {
    let options = match body {
        Some(body) => RequestOptions::new().with_body(body),
        None => RequestOptions::new(),
    };
    client.execute(Method::PUT, path, options).await
}
