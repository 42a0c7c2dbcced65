//! Classification of API error responses
//!
//! Mangopay reports failures as a JSON body carrying a `Type` (an error
//! category such as `param_error`), a `Message`, and for business-rule
//! failures a numeric `Code`. This module turns a failed response into a
//! [`MangopayError`] whose [`ErrorKind`] callers can match on.
//!
//! # Classification order
//!
//! 1. Any status `>= 500` is [`MangopayError::InternalServer`], whatever the body says.
//! 2. A known `Type` selects a type-keyed kind.
//! 3. A known `Code` (or `ResultCode`) selects a code-keyed kind.
//! 4. Anything else is [`ErrorKind::Unclassified`].
//!
//! ```
//! use mangopay::classifier::{classify, ErrorKind};
//! use serde_json::json;
//!
//! let err = classify(400, &json!({ "Code": "101105", "Message": "expired" }));
//! assert!(err.is_kind(ErrorKind::CardExpired));
//! ```

use crate::MangopayError;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

mod kind;

pub use kind::{ErrorKind, ERROR_DOCUMENTATION_URL};

#[cfg(test)]
mod tests;

/// Descriptor of an error returned by the API
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Classified kind
    pub kind: ErrorKind,
    /// HTTP status of the response
    pub http_status: u16,
    /// Human-readable message
    pub message: String,
    /// `Message` as sent by the API
    pub wire_message: Option<String>,
    /// Numeric wire code, when the body carried one
    pub wire_code: Option<String>,
    /// Wire error type, when the body carried one
    pub wire_type: Option<String>,
    /// Identifier the API assigned to this error occurrence
    pub error_id: Option<String>,
    /// Documentation page for the kind
    pub documentation_url: &'static str,
    /// Longer explanation of the kind, where defined
    pub description: Option<&'static str>,
    /// Raw response body
    pub body: Value,
}

impl ApiError {
    /// Per-field messages from the `errors` object of a `param_error` body
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        self.body
            .get("errors")
            .and_then(Value::as_object)
            .map(|errors| {
                errors
                    .iter()
                    .map(|(field, message)| {
                        let message = message
                            .as_str()
                            .map(str::to_string)
                            .unwrap_or_else(|| message.to_string());
                        (field.clone(), message)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolve the kind of a 4xx body without building the full descriptor
pub fn classify_kind(body: &Value) -> ErrorKind {
    if let Some(kind) = body
        .get("Type")
        .and_then(Value::as_str)
        .and_then(ErrorKind::from_wire_type)
    {
        return kind;
    }

    string_field(body, "Code")
        .or_else(|| string_field(body, "ResultCode"))
        .and_then(|code| ErrorKind::from_wire_code(&code))
        .unwrap_or(ErrorKind::Unclassified)
}

/// Map a failed response to an error
pub fn classify(status: u16, body: &Value) -> MangopayError {
    if status >= 500 {
        return MangopayError::InternalServer { status };
    }

    let kind = classify_kind(body);
    let wire_message = body
        .get("Message")
        .or_else(|| body.get("ResultMessage"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let message = if kind.wire_code().is_some() {
        kind.message().to_string()
    } else if kind.wire_type().is_some() {
        wire_message
            .clone()
            .unwrap_or_else(|| kind.message().to_string())
    } else {
        format!(
            "Mangopay client error: {}",
            wire_message.as_deref().unwrap_or("unknown error")
        )
    };

    MangopayError::Api(ApiError {
        kind,
        http_status: status,
        message,
        wire_message,
        wire_code: string_field(body, "Code").or_else(|| string_field(body, "ResultCode")),
        wire_type: body.get("Type").and_then(Value::as_str).map(str::to_string),
        error_id: string_field(body, "Id"),
        documentation_url: kind.documentation_url(),
        description: kind.description(),
        body: body.clone(),
    })
}
