//! API versions and enumerated wire values

use crate::{MangopayError, Result};
use std::fmt;
use std::str::FromStr;

/// Supported API versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// `v2.01`
    #[default]
    V2_01,
}

impl ApiVersion {
    /// Wire representation, used as a path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V2_01 => "v2.01",
        }
    }

    /// All supported versions
    pub fn all_supported() -> Vec<ApiVersion> {
        vec![ApiVersion::V2_01]
    }
}

impl FromStr for ApiVersion {
    type Err = MangopayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "v2.01" | "V2.01" => Ok(ApiVersion::V2_01),
            other => Err(MangopayError::UnsupportedApiVersion(other.to_string())),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every wire value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = MangopayError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(MangopayError::config(format!(
                        "unknown {} value: {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of user account
    UserType {
        Natural => "natural",
        Legal => "legal",
    }
}

wire_enum! {
    /// Kind of bank account, selecting the account schema and endpoint
    BankAccountType {
        Iban => "IBAN",
        Gb => "GB",
        Us => "US",
        Ca => "CA",
        Other => "OTHER",
    }
}

wire_enum! {
    /// US deposit account type
    DepositAccountType {
        Checking => "CHECKING",
        Savings => "SAVINGS",
    }
}

wire_enum! {
    /// Card network family used at card registration
    CardType {
        CbVisaMastercard => "CB_VISA_MASTERCARD",
        Maestro => "MAESTRO",
        Diners => "DINERS",
    }
}

wire_enum! {
    /// Legal status of a legal user
    LegalPersonType {
        Business => "BUSINESS",
        Organization => "ORGANIZATION",
        Soletrader => "SOLETRADER",
    }
}

/// Yearly income brackets, sent as integers `1..=6`
pub mod income_range {
    /// Lower than 18K€
    pub const LOWER_THAN_18K: i64 = 1;
    /// Between 18 and 30K€
    pub const BETWEEN_18K_AND_30K: i64 = 2;
    /// Between 30 and 50K€
    pub const BETWEEN_30K_AND_50K: i64 = 3;
    /// Between 50 and 80K€
    pub const BETWEEN_50K_AND_80K: i64 = 4;
    /// Between 80 and 120K€
    pub const BETWEEN_80K_AND_120K: i64 = 5;
    /// Greater than 120K€
    pub const GREATER_THAN_120K: i64 = 6;
}
