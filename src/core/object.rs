use crate::utils::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub type Object = Map<String, Value>;

/// Shallow copy of `object` with every key of `overrides` written on top.
pub fn clone(object: &Object, overrides: &Object) -> Object {
    let mut result = object.clone();
    for (key, value) in overrides {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Typed `clone`: round-trips `object` through JSON, applies the top-level
/// keys of `overrides` and reads the result back as `T`.
pub fn clone_with<T>(object: &T, overrides: Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(object)?;
    if let (Value::Object(target), Value::Object(patch)) = (&mut merged, overrides) {
        target.extend(patch);
    }
    Ok(serde_json::from_value(merged)?)
}

pub fn is_shallow_equal(a: &Object, b: &Object) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| other == value))
}

pub fn pick<K: AsRef<str>>(object: &Object, keys: &[K]) -> Object {
    keys.iter()
        .filter_map(|key| {
            let key = key.as_ref();
            object
                .get(key)
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}

pub fn omit<K: AsRef<str>>(object: &Object, keys: &[K]) -> Object {
    let omitted: HashSet<&str> = keys.iter().map(|key| key.as_ref()).collect();
    object
        .iter()
        .filter(|(key, _)| !omitted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Later entries overwrite earlier ones with the same key.
pub fn entries_to_object<K, V, I>(entries: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().collect()
}
