//! Wallets

use super::{get, list, post, put, segment, validated, ListOptions};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `wallets` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Wallets<'a> {
    client: &'a MangopayClient,
}

impl<'a> Wallets<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List wallets
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "wallets", options).await
    }

    /// Fetch a wallet
    pub async fn get(&self, wallet_id: &str) -> Result<Value> {
        get(self.client, &format!("wallets/{}", segment(wallet_id))).await
    }

    /// Create a wallet
    pub async fn create(&self, body: Value) -> Result<Value> {
        let body = validated(&body, &self.client.schemas().create_wallet)?;
        post(self.client, "wallets", body).await
    }

    /// Update a wallet
    pub async fn update(&self, wallet_id: &str, body: Value) -> Result<Value> {
        let body = validated(&body, &self.client.schemas().update_wallet)?;
        put(
            self.client,
            &format!("wallets/{}", segment(wallet_id)),
            Some(body),
        )
        .await
    }
}

/// Endpoints of one wallet
#[derive(Debug, Clone)]
pub struct WalletHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> WalletHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Wallet id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the wallet
    pub async fn reload(&self) -> Result<Value> {
        Wallets::new(self.client).get(&self.id).await
    }

    /// Update the wallet
    pub async fn update(&self, body: Value) -> Result<Value> {
        Wallets::new(self.client).update(&self.id, body).await
    }

    /// List the wallet's transactions
    pub async fn transactions(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(
            self.client,
            &format!("wallets/{}/transactions", segment(&self.id)),
            options,
        )
        .await
    }
}
