//! Tests for error classification

use super::{classify, classify_kind, ErrorKind, ERROR_DOCUMENTATION_URL};
use crate::MangopayError;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_card_expired_code() {
    let err = classify(
        400,
        &json!({
            "Code": "101105",
            "Message": "Card expired",
            "Type": "other"
        }),
    );

    assert!(err.is_kind(ErrorKind::CardExpired));
    let api = err.as_api_error().unwrap();
    assert_eq!(api.message, "The card has expired");
    assert_eq!(api.wire_message.as_deref(), Some("Card expired"));
    assert_eq!(api.wire_code.as_deref(), Some("101105"));
    assert_eq!(api.http_status, 400);
    assert_eq!(api.documentation_url, ERROR_DOCUMENTATION_URL);
    assert!(api.description.is_some());
}

#[test]
fn test_insufficient_balance_code() {
    let err = classify(400, &json!({ "Code": "001001" }));
    assert!(err.is_kind(ErrorKind::InsufficientWalletBalance));
}

#[test]
fn test_result_code_fallback() {
    let err = classify(400, &json!({ "ResultCode": "005403", "ResultMessage": "too much" }));
    assert!(err.is_kind(ErrorKind::RefundExceedsAmount));
    assert_eq!(
        err.as_api_error().unwrap().wire_message.as_deref(),
        Some("too much")
    );
}

#[test]
fn test_param_error_type_keeps_wire_message() {
    let body = json!({
        "Message": "One or several required parameters are missing or incorrect.",
        "Type": "param_error",
        "Id": "a9f0d3bc-4e4b-4b64-b2bb-5a7c31f4f2c2",
        "errors": { "IBAN": "The IBAN is invalid" }
    });
    let err = classify(400, &body);

    assert!(err.is_kind(ErrorKind::ParamError));
    let api = err.as_api_error().unwrap();
    assert_eq!(
        api.message,
        "One or several required parameters are missing or incorrect."
    );
    assert_eq!(api.wire_type.as_deref(), Some("param_error"));
    assert_eq!(
        api.error_id.as_deref(),
        Some("a9f0d3bc-4e4b-4b64-b2bb-5a7c31f4f2c2")
    );
    assert_eq!(
        api.field_errors().get("IBAN").map(String::as_str),
        Some("The IBAN is invalid")
    );
}

#[test]
fn test_type_takes_precedence_over_code() {
    let kind = classify_kind(&json!({ "Type": "ressource_not_found", "Code": "101105" }));
    assert_eq!(kind, ErrorKind::ResourceNotFound);
}

#[test]
fn test_unknown_type_falls_through_to_code() {
    let kind = classify_kind(&json!({ "Type": "something_new", "Code": "008003" }));
    assert_eq!(kind, ErrorKind::StolenCard);
}

#[test]
fn test_numeric_code_is_accepted() {
    let kind = classify_kind(&json!({ "Code": 101105 }));
    assert_eq!(kind, ErrorKind::CardExpired);
}

#[test]
fn test_unmapped_code_is_unclassified() {
    let err = classify(409, &json!({ "Code": "424242", "Message": "nope" }));

    assert!(err.is_kind(ErrorKind::Unclassified));
    let api = err.as_api_error().unwrap();
    assert_eq!(api.message, "Mangopay client error: nope");
    assert_eq!(api.wire_code.as_deref(), Some("424242"));
    assert_eq!(api.http_status, 409);
}

#[test]
fn test_non_object_body_is_unclassified() {
    let err = classify(404, &json!("Not Found"));
    assert!(err.is_kind(ErrorKind::Unclassified));
    assert_eq!(
        err.as_api_error().unwrap().message,
        "Mangopay client error: unknown error"
    );
}

#[test]
fn test_server_errors_ignore_body() {
    for status in [500u16, 502, 503, 504] {
        let err = classify(status, &json!({ "Code": "101105", "Type": "param_error" }));
        assert!(
            matches!(err, MangopayError::InternalServer { status: s } if s == status),
            "status {} should be an internal server error",
            status
        );
        assert!(err.kind().is_none());
    }
}

#[test]
fn test_wire_codes_are_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for kind in ErrorKind::ALL {
        if let Some(code) = kind.wire_code() {
            assert!(seen.insert(code), "wire code {} is bound twice", code);
            assert_eq!(ErrorKind::from_wire_code(code), Some(*kind));
            assert_eq!(code.len(), 6);
        }
        if let Some(wire_type) = kind.wire_type() {
            assert_eq!(ErrorKind::from_wire_type(wire_type), Some(*kind));
        }
    }
    assert!(seen.len() >= 40);
}

#[test]
fn test_kind_display_includes_code() {
    assert_eq!(ErrorKind::CardExpired.to_string(), "CardExpired (101105)");
    assert_eq!(ErrorKind::ParamError.to_string(), "ParamError");
}
