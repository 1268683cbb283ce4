//! Employee submission records.
//!
//! The server never rejects a record because of its content, so the wire
//! shape is deliberately lenient: every field is optional, `salary` accepts
//! numbers or numeric strings, and keys outside the record shape are kept
//! verbatim in [`NewRecord::extra`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Column order shared by the plain-text importer and the CSV exporter.
pub const RECORD_COLUMNS: [&str; 11] = [
    "id",
    "firstName",
    "lastName",
    "employeeId",
    "phoneNumber",
    "salary",
    "startDate",
    "supervisorEmail",
    "costCenter",
    "projectCode",
    "privacyConsent",
];

/// A record as posted by the form, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_salary")]
    pub salary: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub supervisor_email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cost_center: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_code: String,
    #[serde(default, deserialize_with = "lenient_consent")]
    pub privacy_consent: bool,
    /// Keys that are not part of the record shape (e.g. extra CSV columns).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored submission. Immutable once appended to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(flatten)]
    pub fields: NewRecord,
}

impl Record {
    /// Attach an id to a submitted record.
    ///
    /// A stray `id` key captured in `extra` is dropped so the record never
    /// serializes two ids.
    pub fn new(id: impl Into<String>, mut fields: NewRecord) -> Self {
        fields.extra.remove("id");
        Self {
            id: id.into(),
            fields,
        }
    }

    /// `"{firstName} {lastName}"` exactly as stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fields.first_name, self.fields.last_name)
    }

    /// The record as a JSON object keyed by camelCase field name.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

impl NewRecord {
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Numeric coercion for salary values.
///
/// Integers parse directly, non-negative finite decimals are truncated,
/// everything else (including negatives and non-numeric text) is `0`.
pub fn coerce_salary(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n.trunc() as u64,
        _ => 0,
    }
}

/// Only the literal `true` grants consent.
pub fn coerce_consent(raw: &str) -> bool {
    raw.trim() == "true"
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

fn lenient_salary<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| coerce_salary(&f.to_string())))
            .unwrap_or(0),
        Value::String(s) => coerce_salary(&s),
        _ => 0,
    })
}

fn lenient_consent<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => coerce_consent(&s),
        _ => false,
    })
}
