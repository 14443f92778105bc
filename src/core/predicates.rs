//! Defined-ness checks, runtime type guards and tiny combinators.
//!
//! Guards inspect a `&dyn Any` by `TypeId`, so they work on native Rust
//! values and on `serde_json::Value` alike.

use crate::domain::model::{AnyFunction, BoxFuture, Optional, Symbol};
use crate::utils::error::{Result, UtilError};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::time::SystemTime;

pub fn is_defined<T>(value: &Optional<T>) -> bool {
    value.is_some()
}

/// `Value::Null` counts as missing.
pub fn is_defined_value(value: &Value) -> bool {
    !value.is_null()
}

pub fn assert_defined<T>(value: Optional<T>, message: Option<&str>) -> Result<T> {
    value.ok_or_else(|| {
        UtilError::invalid_argument(message.unwrap_or("Value is undefined or null"))
    })
}

pub fn identity<T>(value: T) -> T {
    value
}

pub fn noop() {}

/// Wraps a predicate so that it returns the opposite answer. Predicates over
/// several arguments take them as a tuple or slice.
pub fn not<A, F>(predicate: F) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    F: Fn(&A) -> bool,
{
    move |args: &A| !predicate(args)
}

pub fn ok<T, E>(value: T) -> std::result::Result<T, E> {
    Ok(value)
}

pub fn err<T, E>(error: E) -> std::result::Result<T, E> {
    Err(error)
}

fn json(value: &dyn Any) -> Option<&Value> {
    value.downcast_ref::<Value>()
}

pub fn is_string(value: &dyn Any) -> bool {
    value.is::<String>()
        || value.is::<&'static str>()
        || value.is::<Box<str>>()
        || json(value).is_some_and(Value::is_string)
}

pub fn is_number(value: &dyn Any) -> bool {
    value.is::<i8>()
        || value.is::<i16>()
        || value.is::<i32>()
        || value.is::<i64>()
        || value.is::<i128>()
        || value.is::<isize>()
        || value.is::<u8>()
        || value.is::<u16>()
        || value.is::<u32>()
        || value.is::<u64>()
        || value.is::<u128>()
        || value.is::<usize>()
        || value.is::<f32>()
        || value.is::<f64>()
        || json(value).is_some_and(Value::is_number)
}

pub fn is_boolean(value: &dyn Any) -> bool {
    value.is::<bool>() || json(value).is_some_and(Value::is_boolean)
}

pub fn is_symbol(value: &dyn Any) -> bool {
    value.is::<Symbol>()
}

pub fn is_function(value: &dyn Any) -> bool {
    value.is::<AnyFunction<()>>()
        || value.is::<AnyFunction<bool>>()
        || value.is::<AnyFunction<Value>>()
        || value.is::<fn()>()
}

pub fn is_date(value: &dyn Any) -> bool {
    value.is::<DateTime<Utc>>()
        || value.is::<DateTime<Local>>()
        || value.is::<DateTime<FixedOffset>>()
        || value.is::<NaiveDateTime>()
        || value.is::<NaiveDate>()
        || value.is::<SystemTime>()
}

pub fn is_regexp(value: &dyn Any) -> bool {
    value.is::<Regex>()
}

pub fn is_promise(value: &dyn Any) -> bool {
    value.is::<BoxFuture<()>>() || value.is::<BoxFuture<Value>>()
}

pub fn is_array(value: &dyn Any) -> bool {
    value.is::<Vec<Value>>() || json(value).is_some_and(Value::is_array)
}

/// Bare key/value maps only; dates, regexes and other typed values are excluded.
pub fn is_plain_object(value: &dyn Any) -> bool {
    value.is::<Map<String, Value>>()
        || value.is::<HashMap<String, Value>>()
        || value.is::<BTreeMap<String, Value>>()
        || json(value).is_some_and(Value::is_object)
}

pub fn is_object(value: &dyn Any) -> bool {
    is_plain_object(value)
        || is_array(value)
        || is_date(value)
        || is_regexp(value)
        || is_promise(value)
}

pub fn is_safe_number(value: &dyn Any) -> bool {
    if let Some(v) = value.downcast_ref::<f64>() {
        return v.is_finite();
    }
    if let Some(v) = value.downcast_ref::<f32>() {
        return v.is_finite();
    }
    // serde_json numbers are always finite
    is_number(value)
}

fn own_key_count(value: &dyn Any) -> Option<usize> {
    if let Some(map) = value.downcast_ref::<Map<String, Value>>() {
        return Some(map.len());
    }
    if let Some(map) = value.downcast_ref::<HashMap<String, Value>>() {
        return Some(map.len());
    }
    if let Some(map) = value.downcast_ref::<BTreeMap<String, Value>>() {
        return Some(map.len());
    }
    if let Some(items) = value.downcast_ref::<Vec<Value>>() {
        return Some(items.len());
    }
    match json(value) {
        Some(Value::Object(map)) => Some(map.len()),
        Some(Value::Array(items)) => Some(items.len()),
        Some(_) => None,
        // dates, regexes and futures expose no own keys
        None => is_object(value).then_some(0),
    }
}

pub fn is_empty_object(value: &dyn Any) -> bool {
    own_key_count(value) == Some(0)
}
