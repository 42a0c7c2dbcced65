//! Cards and card registrations

use super::{get, post, put, segment, validated};
use crate::client::MangopayClient;
use crate::Result;
use serde_json::Value;

/// `cards` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    client: &'a MangopayClient,
}

impl<'a> Cards<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a card
    pub async fn get(&self, card_id: &str) -> Result<Value> {
        get(self.client, &format!("cards/{}", segment(card_id))).await
    }

    /// Update a card, typically to deactivate it
    pub async fn update(&self, card_id: &str, body: Value) -> Result<Value> {
        put(self.client, &format!("cards/{}", segment(card_id)), Some(body)).await
    }
}

/// Endpoints of one card
#[derive(Debug, Clone)]
pub struct CardHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> CardHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Card id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the card
    pub async fn reload(&self) -> Result<Value> {
        Cards::new(self.client).get(&self.id).await
    }

    /// Update the card
    pub async fn update(&self, body: Value) -> Result<Value> {
        Cards::new(self.client).update(&self.id, body).await
    }
}

/// `cardRegistration` endpoints
#[derive(Debug, Clone, Copy)]
pub struct CardRegistrations<'a> {
    client: &'a MangopayClient,
}

impl<'a> CardRegistrations<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// Fetch a card registration
    pub async fn get(&self, registration_id: &str) -> Result<Value> {
        get(
            self.client,
            &format!("cardRegistration/{}", segment(registration_id)),
        )
        .await
    }

    /// Start a card registration
    pub async fn create(&self, body: Value) -> Result<Value> {
        let body = validated(&body, &self.client.schemas().create_card_registration)?;
        post(self.client, "cardRegistration", body).await
    }

    /// Complete a card registration with the tokenized card data
    pub async fn update(&self, registration_id: &str, body: Value) -> Result<Value> {
        put(
            self.client,
            &format!("cardRegistration/{}", segment(registration_id)),
            Some(body),
        )
        .await
    }
}

/// Endpoints of one card registration
#[derive(Debug, Clone)]
pub struct CardRegistrationHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> CardRegistrationHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// Registration id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the registration
    pub async fn reload(&self) -> Result<Value> {
        CardRegistrations::new(self.client).get(&self.id).await
    }

    /// Update the registration
    pub async fn update(&self, body: Value) -> Result<Value> {
        CardRegistrations::new(self.client)
            .update(&self.id, body)
            .await
    }
}
