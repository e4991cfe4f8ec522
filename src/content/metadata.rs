//! Normalized metadata records
//!
//! Entities expose themselves to page generation as ordered records in
//! which unset optional fields are absent, never present with a null value.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// An ordered field record with absent fields removed
pub type Record = IndexMap<&'static str, Value>;

/// Drop every field whose value is absent, keeping the order of the rest.
///
/// Values are stored as given: no coercion, no trimming.
pub fn normalize<I>(fields: I) -> Record
where
    I: IntoIterator<Item = (&'static str, Option<Value>)>,
{
    fields
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

/// Lift an optional field into a record value
pub fn field<T: Serialize>(value: &Option<T>) -> Option<Value> {
    value.as_ref().and_then(|v| serde_json::to_value(v).ok())
}

/// Lift a required field into a record value
pub fn required<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}
