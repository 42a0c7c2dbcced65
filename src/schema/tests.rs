//! Tests for payload validation

use super::{to_timestamp, validate, validate_value, Rule, Schema, SchemaCatalog};
use crate::types::{ApiVersion, BankAccountType};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

fn catalog() -> SchemaCatalog {
    SchemaCatalog::for_version(ApiVersion::V2_01)
}

fn valid_natural_user() -> serde_json::Value {
    json!({
        "Email": "ada@example.com",
        "FirstName": "Ada",
        "LastName": "Lovelace",
        "Birthday": "1815-12-10T00:00:00Z",
        "Nationality": "GB",
        "CountryOfResidence": "FR"
    })
}

#[test]
fn test_missing_required_field_is_reported() {
    let mut user = valid_natural_user();
    user.as_object_mut().unwrap().remove("Email");

    let err = validate(&user, &catalog().create_natural_user).unwrap_err();
    assert!(err.has_violation("Email"));
    assert!(err.to_string().contains("Email is required"));
}

#[test]
fn test_all_violations_are_collected() {
    let user = json!({
        "FirstName": "x".repeat(101),
        "Nationality": "XX",
        "Birthday": "not a date"
    });

    let err = validate(&user, &catalog().create_natural_user).unwrap_err();
    let paths = err.paths();
    for expected in [
        "Email",
        "FirstName",
        "LastName",
        "Birthday",
        "Nationality",
        "CountryOfResidence",
    ] {
        assert!(paths.contains(&expected), "missing violation for {}", expected);
    }
}

#[test]
fn test_unknown_keys_are_stripped() {
    let mut user = valid_natural_user();
    user["Unknown"] = json!("drop me");
    user["Address"] = json!({
        "AddressLine1": "20 Rue de la Santé",
        "City": "Rennes",
        "Country": "FR",
        "Floor": 3
    });

    let normalized = validate(&user, &catalog().create_natural_user).unwrap();
    assert!(normalized.get("Unknown").is_none());
    assert!(normalized["Address"].get("Floor").is_none());
    assert_eq!(normalized["Address"]["City"], "Rennes");
    assert_eq!(normalized["Email"], "ada@example.com");
}

#[test]
fn test_valid_payload_equals_input_minus_unknown_keys() {
    let schema = Schema::new()
        .required("Description", Rule::string().max(255))
        .optional("Tag", Rule::string());
    let payload = json!({ "Description": "main", "Tag": "t", "Other": true });

    let normalized = validate(&payload, &schema).unwrap();
    assert_eq!(normalized, json!({ "Description": "main", "Tag": "t" }));
}

#[test]
fn test_date_is_floored_to_seconds() {
    let user = {
        let mut u = valid_natural_user();
        u["Birthday"] = json!("2001-09-09T01:46:40.999Z");
        u
    };

    let normalized = validate(&user, &catalog().create_natural_user).unwrap();
    let millis = DateTime::parse_from_rfc3339("2001-09-09T01:46:40.999Z")
        .unwrap()
        .timestamp_millis();
    assert_eq!(normalized["Birthday"], json!(millis.div_euclid(1000)));
    assert_eq!(normalized["Birthday"], json!(1_000_000_000));
}

#[test]
fn test_pre_epoch_date_floors_toward_negative_infinity() {
    assert_eq!(to_timestamp(&json!("1969-12-31T23:59:59.500Z")), Some(-1));
    let birthday = Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap();
    assert_eq!(to_timestamp(&json!("1815-12-10")), Some(birthday.timestamp()));
    assert_eq!(to_timestamp(&json!(-1)), Some(-1));
    assert_eq!(to_timestamp(&json!(true)), None);
}

#[test]
fn test_integer_date_is_epoch_millis() {
    assert_eq!(to_timestamp(&json!(631152000000i64)), Some(631152000));
    assert_eq!(to_timestamp(&json!(631152000999i64)), Some(631152000));

    let mut user = valid_natural_user();
    user["Birthday"] = json!(631152000000i64);
    let normalized = validate(&user, &catalog().create_natural_user).unwrap();
    assert_eq!(normalized["Birthday"], json!(631152000));
}

#[test]
fn test_empty_strings_are_rejected() {
    let mut user = valid_natural_user();
    user["FirstName"] = json!("");
    user["LastName"] = json!("");

    let err = validate(&user, &catalog().create_natural_user).unwrap_err();
    assert!(err.has_violation("FirstName"));
    assert!(err.has_violation("LastName"));
    assert_eq!(err.violations.len(), 2);
    assert!(err.to_string().contains("FirstName must not be empty"));

    let wallet = json!({ "Owners": ["1"], "Description": "", "Currency": "EUR" });
    assert!(validate(&wallet, &catalog().create_wallet)
        .unwrap_err()
        .has_violation("Description"));
}

#[test]
fn test_allow_empty_opts_in() {
    let schema = Schema::new()
        .required("Note", Rule::string().allow_empty())
        .optional("Ref", Rule::numeric_string().allow_empty());
    let payload = json!({ "Note": "", "Ref": "" });
    assert_eq!(validate(&payload, &schema).unwrap(), payload);
}

#[test]
fn test_nested_required_keys_only_apply_when_parent_present() {
    let without_address = valid_natural_user();
    assert!(validate(&without_address, &catalog().create_natural_user).is_ok());

    let mut with_partial_address = valid_natural_user();
    with_partial_address["Address"] = json!({ "AddressLine1": "1 Main St" });
    let err = validate(&with_partial_address, &catalog().create_natural_user).unwrap_err();
    assert!(err.has_violation("Address.City"));
    assert!(err.has_violation("Address.Country"));
    assert!(!err.has_violation("Address.AddressLine1"));
}

#[test]
fn test_update_schema_has_no_required_fields() {
    let normalized = validate(&json!({ "Tag": "vip" }), &catalog().update_natural_user).unwrap();
    assert_eq!(normalized, json!({ "Tag": "vip" }));
}

#[test]
fn test_income_range_bounds() {
    let mut user = valid_natural_user();
    user["IncomeRange"] = json!(7);
    let err = validate(&user, &catalog().create_natural_user).unwrap_err();
    assert!(err.has_violation("IncomeRange"));

    user["IncomeRange"] = json!(3);
    assert!(validate(&user, &catalog().create_natural_user).is_ok());
}

#[test]
fn test_gb_bank_account_constraints() {
    let schema = catalog()
        .create_user_bank_account(BankAccountType::Gb)
        .clone();
    let account = json!({
        "OwnerName": "Ada",
        "OwnerAddress": { "AddressLine1": "1 Main St", "City": "London", "Country": "GB" },
        "AccountNumber": "12A45678",
        "SortCode": "12345"
    });

    let err = validate(&account, &schema).unwrap_err();
    assert!(err.has_violation("AccountNumber"));
    assert!(err.has_violation("SortCode"));
    assert_eq!(err.violations.len(), 2);
}

#[test]
fn test_iban_bank_account_requires_owner_address() {
    let schema = catalog()
        .create_user_bank_account(BankAccountType::Iban)
        .clone();
    let err = validate(
        &json!({ "OwnerName": "Ada", "IBAN": "FR7618829754160173622224154" }),
        &schema,
    )
    .unwrap_err();
    assert_eq!(err.paths(), vec!["OwnerAddress"]);
}

#[test]
fn test_wallet_owners_must_hold_exactly_one_id() {
    let wallet = json!({
        "Owners": ["1", "2"],
        "Description": "main",
        "Currency": "EUR"
    });
    let err = validate(&wallet, &catalog().create_wallet).unwrap_err();
    assert_eq!(err.paths(), vec!["Owners"]);

    let wallet = json!({ "Owners": [42], "Description": "main", "Currency": "EUR" });
    let err = validate(&wallet, &catalog().create_wallet).unwrap_err();
    assert_eq!(err.paths(), vec!["Owners[0]"]);
}

#[test]
fn test_wallet_currency_must_be_iso() {
    let wallet = json!({ "Owners": ["1"], "Description": "main", "Currency": "EURO" });
    let err = validate(&wallet, &catalog().create_wallet).unwrap_err();
    assert!(err.has_violation("Currency"));
}

#[test]
fn test_validate_value_checks_raw_strings() {
    let catalog = catalog();
    assert_eq!(
        validate_value(&json!("natural"), &catalog.user_type).unwrap(),
        json!("natural")
    );
    let err = validate_value(&json!("robot"), &catalog.user_type).unwrap_err();
    assert!(err.to_string().contains("must be one of [natural, legal]"));
    assert!(validate_value(&json!(""), &catalog.bank_account_type).is_err());
}

#[test]
fn test_non_object_payload_is_rejected() {
    let err = validate(&json!([1, 2]), &catalog().create_wallet).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].message, "must be an object");
}

#[test]
fn test_custom_pattern() {
    let schema = Schema::new().required("Ref", Rule::string().pattern("^REF-[0-9]{4}$").unwrap());
    assert!(validate(&json!({ "Ref": "REF-0001" }), &schema).is_ok());
    assert!(validate(&json!({ "Ref": "REF-1" }), &schema).is_err());
}
