//! Declarative validation of outgoing request bodies
//!
//! Request payloads are checked against a [`Schema`] before they are sent.
//! Validation collects every violation instead of stopping at the first one,
//! strips keys the schema does not declare, and converts date fields to Unix
//! timestamps in seconds, which is what the API expects on the wire.
//!
//! # Examples
//!
//! ```
//! use mangopay::schema::{validate, Rule, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .required("Email", Rule::email())
//!     .optional("Birthday", Rule::date());
//!
//! let normalized = validate(
//!     &json!({ "Email": "ada@example.com", "Birthday": "1970-01-02", "Extra": 1 }),
//!     &schema,
//! )
//! .unwrap();
//!
//! assert_eq!(normalized, json!({ "Email": "ada@example.com", "Birthday": 86400 }));
//! ```

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

pub mod catalog;
pub mod codes;

pub use catalog::SchemaCatalog;

#[cfg(test)]
mod tests;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid")
});

static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("NUMERIC_REGEX pattern is valid"));

static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("ALPHANUMERIC_REGEX pattern is valid"));

/// A single field-level constraint failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field (`Address.City`, `Owners[0]`)
    pub path: String,
    /// What is wrong with it
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} {}", self.path, self.message)
        }
    }
}

/// A payload was rejected before transmission
#[derive(Debug, Clone, Error)]
#[error("Validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Every violation found, in schema order
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Whether any violation concerns the given path
    pub fn has_violation(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Paths of all violating fields
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }
}

/// Constraints on a string field
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    min_length: Option<usize>,
    max_length: Option<usize>,
    length: Option<usize>,
    pattern: Option<Regex>,
    email: bool,
    one_of: Option<&'static [&'static str]>,
    allow_empty: bool,
}

impl StringRule {
    /// Set minimum length
    pub fn min(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Require an exact length
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Require the value to match a regular expression
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Restrict the value to a fixed set
    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    /// Accept `""`, which is rejected by default
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    fn check(&self, value: &str) -> Vec<String> {
        let mut problems = Vec::new();
        if value.is_empty() {
            if !self.allow_empty {
                problems.push("must not be empty".to_string());
            }
            return problems;
        }
        let len = value.chars().count();

        if let Some(length) = self.length {
            if len != length {
                problems.push(format!("must be exactly {} characters long", length));
            }
        }
        if let Some(min) = self.min_length {
            if len < min {
                problems.push(format!("must be at least {} characters long", min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                problems.push(format!("must not exceed {} characters", max));
            }
        }
        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(value) {
                problems.push(format!("must match pattern {}", pattern.as_str()));
            }
        }
        if self.email && !EMAIL_REGEX.is_match(value) {
            problems.push("must be a valid email".to_string());
        }
        if let Some(values) = self.one_of {
            if !values.contains(&value) {
                if values.len() <= 10 {
                    problems.push(format!("must be one of [{}]", values.join(", ")));
                } else {
                    problems.push("is not an allowed value".to_string());
                }
            }
        }

        problems
    }
}

/// Constraint attached to one field
#[derive(Debug, Clone)]
pub enum Rule {
    /// A string
    String(StringRule),
    /// An integer, optionally bounded (inclusive)
    Integer { min: Option<i64>, max: Option<i64> },
    /// A date; normalized to Unix seconds
    Date,
    /// A nested object
    Object(Schema),
    /// An array of items, optionally of a fixed length
    Array {
        items: Box<Rule>,
        length: Option<usize>,
    },
}

impl Rule {
    /// Any string
    pub fn string() -> StringRule {
        StringRule::default()
    }

    /// A string of ASCII digits
    pub fn numeric_string() -> StringRule {
        StringRule {
            pattern: Some(NUMERIC_REGEX.clone()),
            ..StringRule::default()
        }
    }

    /// A string of ASCII letters and digits
    pub fn alphanumeric() -> StringRule {
        StringRule {
            pattern: Some(ALPHANUMERIC_REGEX.clone()),
            ..StringRule::default()
        }
    }

    /// An email address
    pub fn email() -> Self {
        Rule::String(StringRule {
            email: true,
            ..StringRule::default()
        })
    }

    /// One of a fixed set of strings
    pub fn one_of(values: &'static [&'static str]) -> Self {
        Rule::String(StringRule::default().one_of(values))
    }

    /// An ISO 3166-1 alpha-2 country code
    pub fn country_code() -> Self {
        Self::one_of(codes::COUNTRY_CODES)
    }

    /// An ISO 4217 currency code
    pub fn currency_code() -> Self {
        Self::one_of(codes::CURRENCY_CODES)
    }

    /// Any integer
    pub fn integer() -> Self {
        Rule::Integer {
            min: None,
            max: None,
        }
    }

    /// An integer within `min..=max`
    pub fn integer_between(min: i64, max: i64) -> Self {
        Rule::Integer {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A date
    pub fn date() -> Self {
        Rule::Date
    }

    /// A nested object
    pub fn object(schema: Schema) -> Self {
        Rule::Object(schema)
    }

    /// An array of items
    pub fn array(items: Rule) -> Self {
        Rule::Array {
            items: Box::new(items),
            length: None,
        }
    }

    /// An array with exactly `length` items
    pub fn array_of_length(items: Rule, length: usize) -> Self {
        Rule::Array {
            items: Box::new(items),
            length: Some(length),
        }
    }
}

impl From<StringRule> for Rule {
    fn from(rule: StringRule) -> Self {
        Rule::String(rule)
    }
}

/// A declared field
#[derive(Debug, Clone)]
pub struct Field {
    /// Key in the payload
    pub name: String,
    /// Constraint on the value
    pub rule: Rule,
    /// Whether the key must be present
    pub required: bool,
}

/// An object shape: the declared keys and their constraints
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required field
    pub fn required(self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.field(name, rule, true)
    }

    /// Declare an optional field
    pub fn optional(self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.field(name, rule, false)
    }

    fn field(mut self, name: impl Into<String>, rule: impl Into<Rule>, required: bool) -> Self {
        let name = name.into();
        let rule = rule.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => {
                existing.rule = rule;
                existing.required = required;
            }
            None => self.fields.push(Field {
                name,
                rule,
                required,
            }),
        }
        self
    }

    /// Append the fields of another schema, overriding same-named ones
    pub fn extend(self, other: Schema) -> Self {
        other.fields.into_iter().fold(self, |schema, f| {
            schema.field(f.name, f.rule, f.required)
        })
    }

    /// Mark existing fields as required
    pub fn require(mut self, names: &[&str]) -> Self {
        for f in &mut self.fields {
            if names.contains(&f.name.as_str()) {
                f.required = true;
            }
        }
        self
    }

    /// Declared fields, in order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Validate an object payload against a schema
///
/// Returns the normalized payload: undeclared keys removed and dates converted
/// to Unix seconds. Fails with every violation found.
pub fn validate(payload: &Value, schema: &Schema) -> Result<Value, ValidationError> {
    let mut violations = Vec::new();
    let normalized = check_object(payload, schema, "", &mut violations);
    finish(normalized, violations)
}

/// Validate a single value against a rule
pub fn validate_value(value: &Value, rule: &Rule) -> Result<Value, ValidationError> {
    let mut violations = Vec::new();
    let normalized = check(value, rule, "value", &mut violations);
    finish(normalized, violations)
}

fn finish(normalized: Option<Value>, violations: Vec<Violation>) -> Result<Value, ValidationError> {
    match normalized {
        Some(value) if violations.is_empty() => Ok(value),
        _ => Err(ValidationError { violations }),
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn violation(violations: &mut Vec<Violation>, path: &str, message: impl Into<String>) {
    violations.push(Violation {
        path: path.to_string(),
        message: message.into(),
    });
}

fn check_object(
    value: &Value,
    schema: &Schema,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<Value> {
    let Some(object) = value.as_object() else {
        violation(violations, path, "must be an object");
        return None;
    };

    let mut out = Map::new();
    for field in &schema.fields {
        let field_path = join_path(path, &field.name);
        match object.get(&field.name) {
            None => {
                if field.required {
                    violation(violations, &field_path, "is required");
                }
            }
            Some(v) => {
                if let Some(normalized) = check(v, &field.rule, &field_path, violations) {
                    out.insert(field.name.clone(), normalized);
                }
            }
        }
    }

    Some(Value::Object(out))
}

fn check(value: &Value, rule: &Rule, path: &str, violations: &mut Vec<Violation>) -> Option<Value> {
    match rule {
        Rule::String(string_rule) => {
            let Some(s) = value.as_str() else {
                violation(violations, path, "must be a string");
                return None;
            };
            let problems = string_rule.check(s);
            if problems.is_empty() {
                Some(value.clone())
            } else {
                for problem in problems {
                    violation(violations, path, problem);
                }
                None
            }
        }
        Rule::Integer { min, max } => {
            let Some(n) = value.as_i64() else {
                violation(violations, path, "must be an integer");
                return None;
            };
            if min.is_some_and(|min| n < min) || max.is_some_and(|max| n > max) {
                violation(
                    violations,
                    path,
                    format!(
                        "must be between {} and {}",
                        min.map_or("-inf".to_string(), |m| m.to_string()),
                        max.map_or("+inf".to_string(), |m| m.to_string())
                    ),
                );
                return None;
            }
            Some(value.clone())
        }
        Rule::Date => match to_timestamp(value) {
            Some(seconds) => Some(Value::from(seconds)),
            None => {
                violation(violations, path, "must be a valid date");
                None
            }
        },
        Rule::Object(schema) => check_object(value, schema, path, violations),
        Rule::Array { items, length } => {
            let Some(array) = value.as_array() else {
                violation(violations, path, "must be an array");
                return None;
            };
            if let Some(length) = length {
                if array.len() != *length {
                    violation(
                        violations,
                        path,
                        format!("must contain exactly {} items", length),
                    );
                }
            }
            let checked: Vec<Option<Value>> = array
                .iter()
                .enumerate()
                .map(|(i, item)| check(item, items, &format!("{}[{}]", path, i), violations))
                .collect();
            checked.into_iter().collect::<Option<Vec<_>>>().map(Value::Array)
        }
    }
}

/// Convert a date value to Unix seconds, rounding toward negative infinity
///
/// Accepts RFC 3339 date-times, `YYYY-MM-DD` dates (midnight UTC) and
/// integer epoch milliseconds.
pub fn to_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().map(|millis| millis.div_euclid(1000)),
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                // timestamp() floors: the nanosecond part is always non-negative
                return Some(dt.timestamp());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc().timestamp())
        }
        _ => None,
    }
}
