//! Configuration and enumerated wire values
//!
//! # Examples
//!
//! ```
//! use mangopay::types::{ApiVersion, ClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> mangopay::Result<()> {
//! let config = ClientConfig::production()
//!     .with_api_version("v2.01".parse::<ApiVersion>()?)
//!     .with_timeout(Duration::from_secs(30));
//!
//! config.validate()?;
//! assert_eq!(config.base_url(), "https://api.mangopay.com");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;


pub use config::{ClientConfig, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use constants::{
    income_range, ApiVersion, BankAccountType, CardType, DepositAccountType, LegalPersonType,
    UserType,
};
