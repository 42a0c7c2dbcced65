//! Request schemas per API version

use super::{Rule, Schema};
use crate::types::{
    income_range, ApiVersion, BankAccountType, CardType, DepositAccountType, LegalPersonType,
    UserType,
};

/// The request schemas of one API version
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    version: ApiVersion,
    /// Path segment of user endpoints
    pub user_type: Rule,
    /// Body of `POST users/natural`
    pub create_natural_user: Schema,
    /// Body of `PUT users/natural/{id}`
    pub update_natural_user: Schema,
    /// Body of `POST users/legal`
    pub create_legal_user: Schema,
    /// Body of `PUT users/legal/{id}`
    pub update_legal_user: Schema,
    /// Path segment of bank account endpoints
    pub bank_account_type: Rule,
    create_bank_account_iban: Schema,
    create_bank_account_gb: Schema,
    create_bank_account_us: Schema,
    create_bank_account_ca: Schema,
    create_bank_account_other: Schema,
    /// Body of `POST wallets`
    pub create_wallet: Schema,
    /// Body of `PUT wallets/{id}`
    pub update_wallet: Schema,
    /// Body of `POST cardRegistration`
    pub create_card_registration: Schema,
}

impl SchemaCatalog {
    /// Build the catalog for an API version
    pub fn for_version(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V2_01 => Self::v2_01(),
        }
    }

    /// API version this catalog describes
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Body schema for creating a bank account of the given type
    pub fn create_user_bank_account(&self, account_type: BankAccountType) -> &Schema {
        match account_type {
            BankAccountType::Iban => &self.create_bank_account_iban,
            BankAccountType::Gb => &self.create_bank_account_gb,
            BankAccountType::Us => &self.create_bank_account_us,
            BankAccountType::Ca => &self.create_bank_account_ca,
            BankAccountType::Other => &self.create_bank_account_other,
        }
    }

    fn v2_01() -> Self {
        let bank_account_iban = bank_account()
            .optional("IBAN", Rule::string())
            .optional("BIC", Rule::string());
        let bank_account_gb = bank_account()
            .optional("AccountNumber", Rule::numeric_string())
            .optional("SortCode", Rule::numeric_string().length(6));
        let bank_account_us = bank_account()
            .optional("AccountNumber", Rule::numeric_string())
            .optional("ABA", Rule::numeric_string().length(9))
            .optional("DepositAccountType", Rule::one_of(DepositAccountType::VALUES));
        let bank_account_ca = bank_account()
            .optional("BankName", Rule::alphanumeric().min(1).max(50))
            .optional("InstitutionNumber", Rule::numeric_string().min(3).max(4))
            .optional("BranchCode", Rule::numeric_string().length(5))
            .optional("AccountNumber", Rule::numeric_string().min(1).max(20));
        let bank_account_other = bank_account()
            .optional("Country", Rule::country_code())
            .optional("BIC", Rule::string())
            .optional("AccountNumber", Rule::string());

        Self {
            version: ApiVersion::V2_01,
            user_type: Rule::one_of(UserType::VALUES),
            create_natural_user: natural_user(true).require(&[
                "Email",
                "FirstName",
                "LastName",
                "Birthday",
                "Nationality",
                "CountryOfResidence",
            ]),
            update_natural_user: natural_user(false),
            create_legal_user: legal_user(true).require(&[
                "Name",
                "Email",
                "LegalPersonType",
                "LegalRepresentativeFirstName",
                "LegalRepresentativeLastName",
            ]),
            update_legal_user: legal_user(false),
            bank_account_type: Rule::one_of(BankAccountType::VALUES),
            create_bank_account_iban: bank_account_iban
                .require(&["OwnerName", "IBAN"])
                .required("OwnerAddress", address(true)),
            create_bank_account_gb: bank_account_gb
                .require(&["OwnerName", "AccountNumber", "SortCode"])
                .required("OwnerAddress", address(true)),
            create_bank_account_us: bank_account_us
                .require(&["OwnerName", "AccountNumber", "ABA"])
                .required("OwnerAddress", address(true)),
            create_bank_account_ca: bank_account_ca
                .require(&[
                    "OwnerName",
                    "AccountNumber",
                    "InstitutionNumber",
                    "BranchCode",
                    "BankName",
                ])
                .optional("OwnerAddress", address(true)),
            create_bank_account_other: bank_account_other
                .require(&["OwnerName", "AccountNumber", "BIC", "Country"])
                .required("OwnerAddress", address(true)),
            create_wallet: wallet().require(&["Owners", "Description", "Currency"]),
            update_wallet: wallet(),
            create_card_registration: Schema::new()
                .required("UserId", Rule::string())
                .required("Currency", Rule::currency_code())
                .optional("CardType", Rule::one_of(CardType::VALUES))
                .optional("Tag", Rule::string().max(255)),
        }
    }
}

/// Postal address; with `strict` the street, city and country are mandatory
fn address(strict: bool) -> Rule {
    let schema = Schema::new()
        .optional("AddressLine1", Rule::string().max(255))
        .optional("AddressLine2", Rule::string().max(255))
        .optional("City", Rule::string().max(255))
        .optional("Region", Rule::string().max(255))
        .optional("PostalCode", Rule::string())
        .optional("Country", Rule::country_code());

    if strict {
        Rule::object(schema.require(&["AddressLine1", "City", "Country"]))
    } else {
        Rule::object(schema)
    }
}

fn natural_user(strict_address: bool) -> Schema {
    Schema::new()
        .optional("Tag", Rule::string().max(255))
        .optional("Email", Rule::email())
        .optional("FirstName", Rule::string().max(100))
        .optional("LastName", Rule::string().max(100))
        .optional("Address", address(strict_address))
        .optional("Birthday", Rule::date())
        .optional("Nationality", Rule::country_code())
        .optional("CountryOfResidence", Rule::country_code())
        .optional("Occupation", Rule::string().max(255))
        .optional(
            "IncomeRange",
            Rule::integer_between(income_range::LOWER_THAN_18K, income_range::GREATER_THAN_120K),
        )
        .optional("ProofOfIdentity", Rule::string())
        .optional("ProofOfAddress", Rule::string())
}

fn legal_user(strict_address: bool) -> Schema {
    Schema::new()
        .optional("Tag", Rule::string().max(255))
        .optional("Name", Rule::string().max(255))
        .optional("Email", Rule::email())
        .optional("LegalPersonType", Rule::one_of(LegalPersonType::VALUES))
        .optional("HeadquartersAddress", address(strict_address))
        .optional("CompanyNumber", Rule::string().max(255))
        .optional("LegalRepresentativeFirstName", Rule::string().max(100))
        .optional("LegalRepresentativeLastName", Rule::string().max(100))
        .optional("LegalRepresentativeEmail", Rule::email())
        .optional("LegalRepresentativeAddress", address(strict_address))
        .optional("LegalRepresentativeBirthday", Rule::date())
        .optional("LegalRepresentativeNationality", Rule::country_code())
        .optional("LegalRepresentativeCountryOfResidence", Rule::country_code())
}

fn bank_account() -> Schema {
    Schema::new()
        .optional("OwnerName", Rule::string())
        .optional("OwnerAddress", address(false))
        .optional("Tag", Rule::string())
}

fn wallet() -> Schema {
    Schema::new()
        .optional("Owners", Rule::array_of_length(Rule::string().into(), 1))
        .optional("Description", Rule::string().max(255))
        .optional("Currency", Rule::currency_code())
        .optional("Tag", Rule::string().max(255))
}
