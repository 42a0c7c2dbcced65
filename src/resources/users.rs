//! Users and their bank accounts

use super::{
    get, list, post, put, segment, validated, ListOptions,
    UserKycDocumentHandle, UserKycDocuments, Wallets,
};
use crate::client::MangopayClient;
use crate::types::{BankAccountType, UserType};
use crate::Result;
use serde_json::{json, Map, Value};

/// `users` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a MangopayClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a MangopayClient) -> Self {
        Self { client }
    }

    /// List users
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, "users", options).await
    }

    /// Fetch a user
    pub async fn get(&self, user_id: &str) -> Result<Value> {
        get(self.client, &format!("users/{}", segment(user_id))).await
    }

    /// Create a user of the given type
    pub async fn create(&self, user_type: UserType, body: Value) -> Result<Value> {
        let schemas = self.client.schemas();
        let schema = match user_type {
            UserType::Natural => &schemas.create_natural_user,
            UserType::Legal => &schemas.create_legal_user,
        };
        let body = validated(&body, schema)?;
        post(self.client, &format!("users/{}", user_type), body).await
    }

    /// Create a natural user
    pub async fn create_natural(&self, body: Value) -> Result<Value> {
        self.create(UserType::Natural, body).await
    }

    /// Create a legal user
    pub async fn create_legal(&self, body: Value) -> Result<Value> {
        self.create(UserType::Legal, body).await
    }

    /// Update a user of the given type
    pub async fn update(&self, user_id: &str, user_type: UserType, body: Value) -> Result<Value> {
        let schemas = self.client.schemas();
        let schema = match user_type {
            UserType::Natural => &schemas.update_natural_user,
            UserType::Legal => &schemas.update_legal_user,
        };
        let body = validated(&body, schema)?;
        put(
            self.client,
            &format!("users/{}/{}", user_type, segment(user_id)),
            Some(body),
        )
        .await
    }
}

/// Endpoints of one user
#[derive(Debug, Clone)]
pub struct UserHandle<'a> {
    client: &'a MangopayClient,
    id: String,
}

impl<'a> UserHandle<'a> {
    pub(crate) fn new(client: &'a MangopayClient, id: String) -> Self {
        Self { client, id }
    }

    /// User id
    pub fn id(&self) -> &str {
        &self.id
    }

    fn path(&self, rest: &str) -> String {
        format!("users/{}/{}", segment(&self.id), rest)
    }

    /// Fetch the user
    pub async fn reload(&self) -> Result<Value> {
        Users::new(self.client).get(&self.id).await
    }

    /// Update the user
    pub async fn update(&self, user_type: UserType, body: Value) -> Result<Value> {
        Users::new(self.client).update(&self.id, user_type, body).await
    }

    /// List the user's cards
    pub async fn cards(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, &self.path("cards"), options).await
    }

    /// List the user's wallets
    pub async fn wallets(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, &self.path("wallets"), options).await
    }

    /// Create a wallet owned by this user unless `body` names other owners
    pub async fn create_wallet(&self, body: Value) -> Result<Value> {
        let body = match body {
            Value::Object(fields) => {
                let mut merged = Map::new();
                merged.insert("Owners".to_string(), json!([self.id]));
                merged.extend(fields);
                Value::Object(merged)
            }
            other => other,
        };
        Wallets::new(self.client).create(body).await
    }

    /// List the user's transactions
    pub async fn transactions(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, &self.path("transactions"), options).await
    }

    /// Bank account endpoints of the user
    pub fn bank_accounts(&self) -> BankAccounts<'a> {
        BankAccounts {
            client: self.client,
            user_id: self.id.clone(),
        }
    }

    /// KYC document endpoints of the user
    pub fn kyc_documents(&self) -> UserKycDocuments<'a> {
        UserKycDocuments::new(self.client, self.id.clone())
    }

    /// Endpoints of one KYC document of the user
    pub fn kyc_document(&self, document_id: impl Into<String>) -> UserKycDocumentHandle<'a> {
        UserKycDocumentHandle::new(self.client, self.id.clone(), document_id.into())
    }
}

/// `users/{id}/bankAccounts` endpoints
#[derive(Debug, Clone)]
pub struct BankAccounts<'a> {
    client: &'a MangopayClient,
    user_id: String,
}

impl<'a> BankAccounts<'a> {
    fn path(&self) -> String {
        format!("users/{}/bankAccounts", segment(&self.user_id))
    }

    /// List the user's bank accounts
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Value> {
        list(self.client, &self.path(), options).await
    }

    /// Fetch one bank account
    pub async fn get(&self, bank_account_id: &str) -> Result<Value> {
        get(
            self.client,
            &format!("{}/{}", self.path(), segment(bank_account_id)),
        )
        .await
    }

    /// Register a bank account of the given type
    pub async fn create(&self, account_type: BankAccountType, body: Value) -> Result<Value> {
        let schemas = self.client.schemas();
        let schema = schemas.create_user_bank_account(account_type);
        let body = validated(&body, schema)?;
        post(self.client, &format!("{}/{}", self.path(), account_type), body).await
    }
}
