//! The closed set of classified API error kinds

use std::fmt;

/// Documentation page for Mangopay error and result codes
pub const ERROR_DOCUMENTATION_URL: &str = "https://docs.mangopay.com/api-references/error-codes/";

/// A classified Mangopay API error
///
/// Kinds are keyed either by the wire-level error `Type` (e.g. `param_error`)
/// or by the numeric wire `Code` (e.g. `"101105"`). Each wire code maps to
/// exactly one kind. Responses matching neither table are [`ErrorKind::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Keyed by wire type
    ParamError,
    ResourceNotFound,
    ForbiddenResource,

    // Transaction
    InsufficientWalletBalance,
    AuthorNotWalletOwner,
    AmountAboveMaximum,
    AmountBelowMinimum,
    InvalidTransactionAmount,
    CreditedFundsNotPositive,
    UserNotRedirected,
    UserCancelledPayment,
    UserFillingPaymentDetails,
    PaymentSessionExpiredBeforeRedirect,
    PaymentSessionExpired,
    AlreadyRefunded,
    BankAccountNotKycVerified,
    BankAccountOwnerKycLimited,

    // Refunds
    RefundExceedsAmount,
    RefundedFeesExceedFees,
    ClientFeeWalletInsufficient,
    DuplicatedRefund,

    // Fraud
    CounterfeitCard,
    LostCard,
    StolenCard,
    CardBinNotAuthorized,
    SecurityViolation,
    FraudSuspectedByBank,
    BankAccountOpposition,
    BlockedByFraudPolicy,
    WalletBlockedByFraudPolicy,
    UserBlockedByFraudPolicy,

    // Technical
    PspConfigurationError,
    PspTechnicalError,
    BankTechnicalError,
    TechnicalError,

    // Card transactions
    TransactionNotCompleted,
    TransactionCancelledByUser,
    DoNotHonor,
    BankAmountLimit,
    RefusedByTerminal,
    CardLimitReached,
    CardExpired,
    CardInactive,
    MaximumAttemptsReached,
    MaximumAmountExceeded,
    MaximumUsesExceeded,
    DebitLimitExceeded,
    TransactionRefused,

    // 3DSecure
    SecureModeFailed,
    SecureModeNotEnrolled,
    SecureModeNotCompatible,
    SecureModeSessionExpired,
    SecureModeUnavailable,

    // Card registration
    InvalidCardNumber,
    InvalidCardHolderName,
    InvalidPinCode,
    InvalidPinFormat,
    InvalidCardNumberFormat,
    InvalidExpiryDate,
    InvalidCvv,
    InvalidCallbackUrl,
    InvalidRegistrationData,
    TokenInputError,

    /// A 4xx response that matched neither the type nor the code table
    Unclassified,
}

/// Static metadata attached to a kind
struct KindSpec {
    wire_code: Option<&'static str>,
    wire_type: Option<&'static str>,
    message: &'static str,
    description: Option<&'static str>,
}

const fn coded(code: &'static str, message: &'static str) -> KindSpec {
    KindSpec {
        wire_code: Some(code),
        wire_type: None,
        message,
        description: None,
    }
}

const fn coded_with(
    code: &'static str,
    message: &'static str,
    description: &'static str,
) -> KindSpec {
    KindSpec {
        wire_code: Some(code),
        wire_type: None,
        message,
        description: Some(description),
    }
}

const fn typed(wire_type: &'static str, message: &'static str) -> KindSpec {
    KindSpec {
        wire_code: None,
        wire_type: Some(wire_type),
        message,
        description: None,
    }
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: &'static [ErrorKind] = &[
        Self::ParamError,
        Self::ResourceNotFound,
        Self::ForbiddenResource,
        Self::InsufficientWalletBalance,
        Self::AuthorNotWalletOwner,
        Self::AmountAboveMaximum,
        Self::AmountBelowMinimum,
        Self::InvalidTransactionAmount,
        Self::CreditedFundsNotPositive,
        Self::UserNotRedirected,
        Self::UserCancelledPayment,
        Self::UserFillingPaymentDetails,
        Self::PaymentSessionExpiredBeforeRedirect,
        Self::PaymentSessionExpired,
        Self::AlreadyRefunded,
        Self::BankAccountNotKycVerified,
        Self::BankAccountOwnerKycLimited,
        Self::RefundExceedsAmount,
        Self::RefundedFeesExceedFees,
        Self::ClientFeeWalletInsufficient,
        Self::DuplicatedRefund,
        Self::CounterfeitCard,
        Self::LostCard,
        Self::StolenCard,
        Self::CardBinNotAuthorized,
        Self::SecurityViolation,
        Self::FraudSuspectedByBank,
        Self::BankAccountOpposition,
        Self::BlockedByFraudPolicy,
        Self::WalletBlockedByFraudPolicy,
        Self::UserBlockedByFraudPolicy,
        Self::PspConfigurationError,
        Self::PspTechnicalError,
        Self::BankTechnicalError,
        Self::TechnicalError,
        Self::TransactionNotCompleted,
        Self::TransactionCancelledByUser,
        Self::DoNotHonor,
        Self::BankAmountLimit,
        Self::RefusedByTerminal,
        Self::CardLimitReached,
        Self::CardExpired,
        Self::CardInactive,
        Self::MaximumAttemptsReached,
        Self::MaximumAmountExceeded,
        Self::MaximumUsesExceeded,
        Self::DebitLimitExceeded,
        Self::TransactionRefused,
        Self::SecureModeFailed,
        Self::SecureModeNotEnrolled,
        Self::SecureModeNotCompatible,
        Self::SecureModeSessionExpired,
        Self::SecureModeUnavailable,
        Self::InvalidCardNumber,
        Self::InvalidCardHolderName,
        Self::InvalidPinCode,
        Self::InvalidPinFormat,
        Self::InvalidCardNumberFormat,
        Self::InvalidExpiryDate,
        Self::InvalidCvv,
        Self::InvalidCallbackUrl,
        Self::InvalidRegistrationData,
        Self::TokenInputError,
        Self::Unclassified,
    ];

    fn spec(self) -> KindSpec {
        match self {
            Self::ParamError => typed(
                "param_error",
                "One or several required parameters are missing or incorrect",
            ),
            Self::ResourceNotFound => typed("ressource_not_found", "Cannot found the ressource"),
            Self::ForbiddenResource => typed(
                "forbidden_ressource",
                "The ressource does not allow the action you're trying to do",
            ),

            Self::InsufficientWalletBalance => coded_with(
                "001001",
                "Unsufficient wallet balance",
                "The debited wallet does not hold enough funds to process the transaction",
            ),
            Self::AuthorNotWalletOwner => coded("001002", "Author is not the wallet owner"),
            Self::AmountAboveMaximum => coded(
                "001011",
                "Transaction amount is higher than maximum permitted amount",
            ),
            Self::AmountBelowMinimum => coded(
                "001012",
                "Transaction amount is lower than minimum permitted amount",
            ),
            Self::InvalidTransactionAmount => coded("001013", "Invalid transaction amount"),
            Self::CreditedFundsNotPositive => coded_with(
                "001014",
                "CreditedFunds must be more than 0 (DebitedFunds can not equal Fees)",
                "The fees taken on the transaction leave nothing to credit",
            ),
            Self::UserNotRedirected => coded("001030", "User has not been redirected"),
            Self::UserCancelledPayment => coded("001031", "User canceled the payment"),
            Self::UserFillingPaymentDetails => {
                coded("001032", "User is filling in the payment card details")
            }
            Self::PaymentSessionExpiredBeforeRedirect => coded(
                "001033",
                "User has not been redirected then the payment session has expired",
            ),
            Self::PaymentSessionExpired => coded(
                "001034",
                "User has let the payment session expire without paying",
            ),
            Self::AlreadyRefunded => coded(
                "001401",
                "Transaction has already been successfully refunded",
            ),
            Self::BankAccountNotKycVerified => coded_with(
                "002998",
                "The bank account needs to be KYC verified",
                "Pay-outs to this bank account require the owner's identity to be validated first",
            ),
            Self::BankAccountOwnerKycLimited => coded(
                "002999",
                "Blocked due to the Bank Account Owner's KYC limitations",
            ),

            Self::RefundExceedsAmount => coded_with(
                "005403",
                "The refund cannot exceed initial transaction amount",
                "The sum of all refunds on a transaction is capped at the amount originally debited",
            ),
            Self::RefundedFeesExceedFees => coded(
                "005404",
                "The refunded fees cannot exceed initial fee amount",
            ),
            Self::ClientFeeWalletInsufficient => {
                coded("005405", "Balance of client fee wallet unsufficient")
            }
            Self::DuplicatedRefund => coded(
                "005407",
                "Duplicated operation: you cannot reimburse the same amount on a given transaction during the same day",
            ),

            Self::CounterfeitCard => coded("008001", "Counterfeit Card"),
            Self::LostCard => coded("008002", "Lost Card"),
            Self::StolenCard => coded("008003", "Stolen Card"),
            Self::CardBinNotAuthorized => coded("008004", "Card bin not authorized"),
            Self::SecurityViolation => coded("008005", "Security violation"),
            Self::FraudSuspectedByBank => coded("008006", "Fraud suspected by the bank"),
            Self::BankAccountOpposition => coded("008007", "Opposition on bank account"),
            Self::BlockedByFraudPolicy => coded("008500", "Transaction blocked by Fraud Policy"),
            Self::WalletBlockedByFraudPolicy => coded("008600", "Wallet blocked by Fraud policy"),
            Self::UserBlockedByFraudPolicy => coded("008700", "User blocked by Fraud policy"),

            Self::PspConfigurationError => coded("009103", "PSP configuration error"),
            Self::PspTechnicalError => coded("009199", "PSP technical error"),
            Self::BankTechnicalError => coded("009499", "Bank technical error"),
            Self::TechnicalError => coded("009999", "Technical error"),

            Self::TransactionNotCompleted => coded("101001", "The user does not complete transaction"),
            Self::TransactionCancelledByUser => coded(
                "101002",
                "The transaction has been cancelled by the user",
            ),
            Self::DoNotHonor => coded("101101", "Transaction refused by the bank (Do not honor)"),
            Self::BankAmountLimit => coded("101102", "Transaction refused by the bank (Amount limit)"),
            Self::RefusedByTerminal => coded("101103", "Transaction refused by the terminal"),
            Self::CardLimitReached => coded(
                "101104",
                "Transaction refused by the bank (card limit reached)",
            ),
            Self::CardExpired => coded_with(
                "101105",
                "The card has expired",
                "The card's expiry date is in the past; ask the user to register a new card",
            ),
            Self::CardInactive => coded("101106", "The card is inactive"),
            Self::MaximumAttemptsReached => coded("101111", "Maximum number of attempts reached"),
            Self::MaximumAmountExceeded => coded("101112", "Maximum amount exceeded"),
            Self::MaximumUsesExceeded => coded("101113", "Maximum Uses Exceeded"),
            Self::DebitLimitExceeded => coded("101115", "Debit limit exceeded"),
            Self::TransactionRefused => coded("101199", "Transaction refused"),

            Self::SecureModeFailed => coded("101301", "Secure mode: 3DSecure authentication has failed"),
            Self::SecureModeNotEnrolled => coded(
                "101302",
                "Secure mode: The card is not enrolled with 3DSecure",
            ),
            Self::SecureModeNotCompatible => coded(
                "101303",
                "Secure mode: The card is not compatible with 3DSecure",
            ),
            Self::SecureModeSessionExpired => coded(
                "101304",
                "Secure mode: The 3DSecure authentication session has expired",
            ),
            Self::SecureModeUnavailable => coded(
                "101399",
                "Secure mode: 3DSecure authentication is not available",
            ),

            Self::InvalidCardNumber => coded("105101", "Invalid card number"),
            Self::InvalidCardHolderName => coded("105102", "Invalid cardholder name"),
            Self::InvalidPinCode => coded("105103", "Invalid PIN code"),
            Self::InvalidPinFormat => coded("105104", "Invalid PIN format"),
            Self::InvalidCardNumberFormat => coded("105202", "Card number: invalid format"),
            Self::InvalidExpiryDate => coded("105203", "Expiry date: missing or invalid format"),
            Self::InvalidCvv => coded("105204", "CVV: missing or invalid format"),
            Self::InvalidCallbackUrl => coded("105205", "Callback URL: Invalid format"),
            Self::InvalidRegistrationData => coded("105206", "Registration data : Invalid format"),
            Self::TokenInputError => coded("105299", "Token input Error"),

            Self::Unclassified => KindSpec {
                wire_code: None,
                wire_type: None,
                message: "Mangopay client error",
                description: None,
            },
        }
    }

    /// Look up the kind bound to a wire-level error type (`Type` in the body)
    pub fn from_wire_type(wire_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.wire_type() == Some(wire_type))
    }

    /// Look up the kind bound to a numeric wire code (`Code` in the body)
    pub fn from_wire_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.wire_code() == Some(code))
    }

    /// Numeric wire code, for code-keyed kinds
    pub fn wire_code(self) -> Option<&'static str> {
        self.spec().wire_code
    }

    /// Wire error type, for type-keyed kinds
    pub fn wire_type(self) -> Option<&'static str> {
        self.spec().wire_type
    }

    /// Fixed human-readable message
    pub fn message(self) -> &'static str {
        self.spec().message
    }

    /// Longer explanation, where one is defined
    pub fn description(self) -> Option<&'static str> {
        self.spec().description
    }

    /// Documentation page describing this kind
    pub fn documentation_url(self) -> &'static str {
        ERROR_DOCUMENTATION_URL
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wire_code() {
            Some(code) => write!(f, "{:?} ({})", self, code),
            None => write!(f, "{:?}", self),
        }
    }
}
