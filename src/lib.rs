//! # Mangopay Rust client
//!
//! An async client for the Mangopay payment REST API.
//!
//! ## Features
//!
//! - **OAuth client-credentials authentication**: bearer tokens are acquired
//!   lazily and renewed once, transparently, when the API answers 401
//! - **Typed errors**: error responses are classified into a closed
//!   [`ErrorKind`] taxonomy keyed by Mangopay's wire codes
//! - **Local validation**: user, bank account and wallet bodies are checked
//!   and normalized before they are sent
//! - **Resource handles**: `client.user(id).bank_accounts().list(None)`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mangopay::{ClientConfig, ErrorKind, MangopayClient, MangopayError};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MangopayClient::new("my-client-id", "my-api-key", ClientConfig::default())?;
//!
//!     let result = client
//!         .pay_ins()
//!         .card_direct(json!({
//!             "AuthorId": "8494514",
//!             "CreditedWalletId": "8494559",
//!             "DebitedFunds": { "Currency": "EUR", "Amount": 1200 },
//!             "Fees": { "Currency": "EUR", "Amount": 0 },
//!             "CardId": "8494555",
//!             "SecureModeReturnURL": "https://example.com/return"
//!         }))
//!         .await;
//!
//!     match result {
//!         Ok(pay_in) => println!("created pay-in {}", pay_in["Id"]),
//!         Err(e) if e.is_kind(ErrorKind::CardExpired) => println!("ask for another card"),
//!         Err(MangopayError::Validation(e)) => println!("invalid body: {}", e),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod error;
pub mod resources;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use classifier::{ApiError, ErrorKind};
pub use client::{MangopayClient, RequestOptions};
pub use error::{MangopayError, Result};
pub use resources::ListOptions;
pub use schema::ValidationError;
pub use types::{ApiVersion, ClientConfig};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert!(client::USER_AGENT.ends_with(VERSION));
    }

    #[test]
    fn test_client_rejects_missing_credentials() {
        let err = MangopayClient::new("", "secret", ClientConfig::default()).unwrap_err();
        assert!(matches!(err, MangopayError::Config(_)));

        let err = MangopayClient::new("client", "", ClientConfig::default()).unwrap_err();
        assert!(matches!(err, MangopayError::Config(_)));
    }

    #[test]
    fn test_client_debug_hides_secret() {
        let client = MangopayClient::new("client", "s3cr3t", ClientConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("client"));
        assert!(!debug.contains("s3cr3t"));
    }
}
