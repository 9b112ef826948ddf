//! The expense record and the normalization from backend JSON.
//!
//! The backend is loose about its records: the identifier shows up as either
//! `_id` or `id`, amounts can arrive as strings or `null`, and categories may
//! be missing. Everything is normalized here, once, so the rest of the app
//! only ever sees [Expense].

use std::fmt;

use serde::de::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Server-assigned identifier. Opaque and never changed by the client.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: Option<ExpenseId>,
    /// Per-day running number the backend assigns on insert.
    pub serial_no: Option<u64>,
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    /// Raw date as sent by the backend, either `YYYY-MM-DD` or a full ISO
    /// timestamp.
    pub date: Option<String>,
}

impl Expense {
    /// Normalizes a single record.
    ///
    /// # Errors
    /// Returns [ApiError::Decode] if the value is not an object.
    pub fn from_json(value: &Value) -> Result<Self, ApiError> {
        let Value::Object(record) = value else {
            return Err(serde_json::Error::custom("expected an expense object").into());
        };

        Ok(Self::from_record(record))
    }

    fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            id: identifier(record),
            serial_no: record.get("serialNo").and_then(Value::as_u64),
            title: non_empty_string(record.get("title")).unwrap_or_default(),
            amount: coerce_amount(record.get("amount")),
            category: non_empty_string(record.get("category")),
            date: non_empty_string(record.get("date")),
        }
    }

    /// Calendar-date part of the date, if any.
    pub fn date_prefix(&self) -> Option<&str> {
        self.date.as_deref().map(date_prefix)
    }
}

/// Normalizes the body of the list call.
///
/// Anything that is not an array counts as an empty collection, and array
/// entries that are not objects are skipped.
pub fn expenses_from_json(value: Value) -> Vec<Expense> {
    let Value::Array(items) = value else {
        tracing::warn!("expected an array of expenses, got {value}");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(Expense::from_record(record)),
            other => {
                tracing::warn!("skipping malformed expense entry: {other}");
                None
            }
        })
        .collect()
}

fn identifier(record: &Map<String, Value>) -> Option<ExpenseId> {
    ["_id", "id"]
        .iter()
        .find_map(|key| match record.get(*key)? {
            Value::String(id) if !id.is_empty() => Some(ExpenseId::new(id.as_str())),
            Value::Number(id) => Some(ExpenseId::new(id.to_string())),
            _ => None,
        })
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Reads an amount the way the backend's clients always have: numbers and
/// numeric strings count, anything else is zero.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_amount(s),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// Parses user or wire text into an amount; blank text is zero, as is text
/// that is not a finite number.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// `2024-03-01T10:00:00Z` -> `2024-03-01`.
pub fn date_prefix(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}
