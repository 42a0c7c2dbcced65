//! Money movements: pay-ins, pay-outs, transfers, refunds and
//! pre-authorizations
//!
//! None of these bodies are validated locally; the API is the authority on
//! their fields.

use super::{get, list, post, put, segment, ListOptions};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `payIns` endpoints
#[derive(Debug, Clone, Copy)]
pub struct PayIns<'a> {
    client: &'a MangopayClient,
}

impl<'a> PayIns<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List pay-ins
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "payIns", options).await
    }

    /// Fetch a pay-in
    pub async fn get(&self, pay_in_id: &str) -> Result<Value> {
        get(self.client, &format!("payIns/{}", segment(pay_in_id))).await
    }

    /// Create a pay-in with an explicit payment method and execution type,
    /// for example `("card", "direct")`
    pub async fn create(&self, method: &str, execution: &str, body: Value) -> Result<Value> {
        post(
            self.client,
            &format!("payIns/{}/{}", segment(method), segment(execution)),
            body,
        )
        .await
    }

    /// Create a direct bank wire pay-in
    pub async fn bank_wire_direct(&self, body: Value) -> Result<Value> {
        self.create("bankWire", "direct", body).await
    }

    /// Create a web direct debit pay-in
    pub async fn direct_debit_web(&self, body: Value) -> Result<Value> {
        self.create("directDebit", "web", body).await
    }

    /// Create a direct pay-in from a pre-authorization
    pub async fn preauthorized_direct(&self, body: Value) -> Result<Value> {
        self.create("preAuthorized", "direct", body).await
    }

    /// Create a direct card pay-in
    pub async fn card_direct(&self, body: Value) -> Result<Value> {
        self.create("card", "direct", body).await
    }

    /// Create a web card pay-in
    pub async fn card_web(&self, body: Value) -> Result<Value> {
        self.create("card", "web", body).await
    }
}

/// Endpoints of one pay-in
#[derive(Debug, Clone)]
pub struct PayInHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> PayInHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Pay-in id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the pay-in
    pub async fn reload(&self) -> Result<Value> {
        PayIns::new(self.client).get(&self.id).await
    }

    /// Refund the pay-in
    pub async fn refund(&self, body: Value) -> Result<Value> {
        post(
            self.client,
            &format!("payIns/{}/refunds", segment(&self.id)),
            body,
        )
        .await
    }
}

/// `payouts` endpoints
#[derive(Debug, Clone, Copy)]
pub struct PayOuts<'a> {
    client: &'a MangopayClient,
}

impl<'a> PayOuts<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a pay-out
    pub async fn get(&self, pay_out_id: &str) -> Result<Value> {
        get(self.client, &format!("payouts/{}", segment(pay_out_id))).await
    }

    /// Create a bank wire pay-out
    pub async fn bank_wire(&self, body: Value) -> Result<Value> {
        post(self.client, "payouts/bankWire", body).await
    }
}

/// Endpoints of one pay-out
#[derive(Debug, Clone)]
pub struct PayOutHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> PayOutHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Pay-out id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the pay-out
    pub async fn reload(&self) -> Result<Value> {
        PayOuts::new(self.client).get(&self.id).await
    }
}

/// `transfers` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    client: &'a MangopayClient,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a transfer
    pub async fn get(&self, transfer_id: &str) -> Result<Value> {
        get(self.client, &format!("transfers/{}", segment(transfer_id))).await
    }

    /// Transfer funds between wallets
    pub async fn create(&self, body: Value) -> Result<Value> {
        post(self.client, "transfers", body).await
    }
}

/// Endpoints of one transfer
#[derive(Debug, Clone)]
pub struct TransferHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> TransferHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Transfer id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the transfer
    pub async fn reload(&self) -> Result<Value> {
        Transfers::new(self.client).get(&self.id).await
    }

    /// Refund the transfer
    pub async fn refund(&self, body: Value) -> Result<Value> {
        post(
            self.client,
            &format!("transfers/{}/refunds", segment(&self.id)),
            body,
        )
        .await
    }
}

/// `refunds` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Refunds<'a> {
    client: &'a MangopayClient,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a refund
    pub async fn get(&self, refund_id: &str) -> Result<Value> {
        get(self.client, &format!("refunds/{}", segment(refund_id))).await
    }
}

/// Endpoints of one refund
#[derive(Debug, Clone)]
pub struct RefundHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> RefundHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Refund id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the refund
    pub async fn reload(&self) -> Result<Value> {
        Refunds::new(self.client).get(&self.id).await
    }
}

/// `preAuthorizations` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Preauthorizations<'a> {
    client: &'a MangopayClient,
}

impl<'a> Preauthorizations<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a pre-authorization
    pub async fn get(&self, preauthorization_id: &str) -> Result<Value> {
        get(
            self.client,
            &format!("preAuthorizations/{}", segment(preauthorization_id)),
        )
        .await
    }

    /// Update a pre-authorization, typically to cancel it
    pub async fn update(&self, preauthorization_id: &str, body: Value) -> Result<Value> {
        put(
            self.client,
            &format!("preAuthorizations/{}", segment(preauthorization_id)),
            Some(body),
        )
        .await
    }

    /// Pre-authorize an amount on a card
    pub async fn card_direct(&self, body: Value) -> Result<Value> {
        post(self.client, "preAuthorizations/card/direct", body).await
    }
}

/// Endpoints of one pre-authorization
#[derive(Debug, Clone)]
pub struct PreauthorizationHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> PreauthorizationHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Pre-authorization id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the pre-authorization
    pub async fn reload(&self) -> Result<Value> {
        Preauthorizations::new(self.client).get(&self.id).await
    }

    /// Update the pre-authorization
    pub async fn update(&self, body: Value) -> Result<Value> {
        Preauthorizations::new(self.client)
            .update(&self.id, body)
            .await
    }
}
