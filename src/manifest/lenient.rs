//! Tolerant field deserializers for manifest records
//!
//! A mistyped field is read as absent so the record drops out of matching
//! instead of failing the whole manifest.

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// A string field; any other JSON type is treated as absent
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(other) => {
            warn!("Ignoring non-string manifest value {}", other);
            None
        }
    })
}

/// An array of tags; non-string elements are dropped, a non-array is treated as absent
pub fn tag_set<'de, D>(deserializer: D) -> Result<Option<IndexSet<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(values)) => Some(
            values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(tag) => Some(tag),
                    other => {
                        warn!("Ignoring non-string manifest tag {}", other);
                        None
                    }
                })
                .collect(),
        ),
        Some(other) => {
            warn!("Ignoring manifest tag list that is not an array: {}", other);
            None
        }
    })
}
