//! # JSON Records
//!
//! Schema-less records backed by `serde_json::Value`. There is no declared
//! type to validate against, so [`JsonSchema`] validates keys against the
//! records being sorted: a key exists when at least one record carries a
//! scalar (or `null`) member at that path.

use super::{Accessor, KeyResolver};
use crate::types::{SortKey, SortValue};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of walking a path on a JSON document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonLookup<'a> {
    /// Every segment resolved
    Found(&'a serde_json::Value),
    /// A `null` was reached before the last segment
    AbsentIntermediate,
    /// A segment is missing, or the walk hit a scalar or array
    Missing,
}

/// Record backed by a JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord {
    data: serde_json::Value,
}

impl JsonRecord {
    /// Create a new JSON record from serde_json::Value
    pub fn from_json_value(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// Create a JSON record from a JSON string
    pub fn from_json_str(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str).map(Self::from_json_value)
    }

    /// Get direct access to the underlying JSON value
    pub fn as_json_value(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn into_json_value(self) -> serde_json::Value {
        self.data
    }

    /// Walk `key` through nested objects
    pub fn lookup(&self, key: &SortKey) -> JsonLookup<'_> {
        let mut current = &self.data;

        for segment in key.segments() {
            current = match current {
                serde_json::Value::Object(map) => match map.get(segment) {
                    Some(value) => value,
                    None => return JsonLookup::Missing,
                },
                serde_json::Value::Null => return JsonLookup::AbsentIntermediate,
                _ => return JsonLookup::Missing,
            };
        }

        JsonLookup::Found(current)
    }

    /// Resolve `key` to a sort value; anything not found is `Absent`
    pub fn resolve(&self, key: &SortKey) -> SortValue {
        match self.lookup(key) {
            JsonLookup::Found(value) => json_to_sort_value(value),
            JsonLookup::AbsentIntermediate | JsonLookup::Missing => SortValue::Absent,
        }
    }
}

impl From<serde_json::Value> for JsonRecord {
    fn from(data: serde_json::Value) -> Self {
        Self::from_json_value(data)
    }
}

/// Convert a scalar JSON value. Objects and arrays are not orderable.
fn json_to_sort_value(value: &serde_json::Value) -> SortValue {
    match value {
        serde_json::Value::String(s) => SortValue::Text(s.clone()),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                SortValue::Integer(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                SortValue::Integer(i128::from(u))
            } else {
                n.as_f64().map(SortValue::Float).unwrap_or(SortValue::Absent)
            }
        }
        serde_json::Value::Bool(b) => SortValue::Boolean(*b),
        serde_json::Value::Null | serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            SortValue::Absent
        }
    }
}

fn is_orderable_leaf(value: &serde_json::Value) -> bool {
    !matches!(value, serde_json::Value::Object(_) | serde_json::Value::Array(_))
}

/// Key resolver that validates against the records being sorted
#[derive(Debug, Clone)]
pub struct JsonSchema<'a> {
    type_name: String,
    records: &'a [JsonRecord],
}

impl<'a> JsonSchema<'a> {
    pub fn new(type_name: impl Into<String>, records: &'a [JsonRecord]) -> Self {
        Self {
            type_name: type_name.into(),
            records,
        }
    }

    /// Schema named `JsonRecord`
    pub fn sample(records: &'a [JsonRecord]) -> Self {
        Self::new("JsonRecord", records)
    }

    /// Whether the sampled records support `key`.
    ///
    /// An empty sample accepts every key. Otherwise some record must hold an
    /// orderable value at the path and none may hold an object or array there.
    pub fn supports(&self, key: &SortKey) -> bool {
        if self.records.is_empty() {
            return true;
        }

        let mut seen = false;
        for record in self.records {
            if let JsonLookup::Found(value) = record.lookup(key) {
                if !is_orderable_leaf(value) {
                    return false;
                }
                seen = true;
            }
        }
        seen
    }
}

impl KeyResolver<JsonRecord> for JsonSchema<'_> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn accessor(&self, key: &SortKey) -> Option<Accessor<JsonRecord>> {
        if !self.supports(key) {
            return None;
        }

        let key = key.clone();
        Some(Arc::new(move |record: &JsonRecord| record.resolve(&key)))
    }
}
