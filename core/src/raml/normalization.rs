//! # Input Normalization
//!
//! Deserialization helpers that fold the loosely shaped parser output into
//! the direct mapping types used by the converter. These run at the parse
//! boundary, so the rest of the crate never sees `null` maps or
//! list-of-single-key-map declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Either shape a parser may emit for `traits`, `schemas` or `resourceTypes`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NamedEntries {
    List(Vec<Option<IndexMap<String, Value>>>),
    Map(IndexMap<String, Value>),
}

/// Folds a sequence of single-entry maps into one ordered map.
///
/// Later entries overwrite earlier ones on key collision. A key keeps the
/// position of its first declaration.
pub fn merge_named_entries<I>(entries: I) -> IndexMap<String, Value>
where
    I: IntoIterator<Item = IndexMap<String, Value>>,
{
    entries
        .into_iter()
        .fold(IndexMap::new(), |mut acc, entry| {
            for (name, value) in entry {
                acc.insert(name, value);
            }
            acc
        })
}

pub(crate) fn named_entries<'de, D>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<NamedEntries>::deserialize(deserializer)?;
    Ok(match entries {
        None => IndexMap::new(),
        Some(NamedEntries::List(list)) => merge_named_entries(list.into_iter().flatten()),
        Some(NamedEntries::Map(map)) => map,
    })
}

/// A map whose values may each be `null` (e.g. `headers: { X-Trace: ~ }`).
pub(crate) fn nullable_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let map = Option::<IndexMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}

pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
