//! The endpoints serving rooms and items answer either with the keyed map
//! itself or with a gateway envelope whose `body` holds that map as a JSON
//! string. Both shapes are accepted here so nothing downstream has to care.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::{Catalog, Items, Keyed, Rooms};
use crate::error::{CoreError, CoreResult};

/// Parse a rooms payload into a key-normalized catalog.
pub fn parse_rooms(input: &str) -> CoreResult<Rooms> {
    parse_catalog(input)
}

/// Parse an items payload into a key-normalized catalog.
pub fn parse_items(input: &str) -> CoreResult<Items> {
    parse_catalog(input)
}

fn parse_catalog<T: Keyed + DeserializeOwned>(input: &str) -> CoreResult<Catalog<T>> {
    let value = unwrap_envelope(serde_json::from_str(input)?)?;
    let catalog: Catalog<T> = serde_json::from_value(value)?;
    catalog.normalize_keys()
}

fn unwrap_envelope(value: Value) -> CoreResult<Value> {
    let Value::Object(map) = value else {
        return Err(CoreError::Shape(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    };

    match map.get("body") {
        Some(Value::String(body)) => {
            let inner: Value = serde_json::from_str(body)?;
            if inner.is_object() {
                Ok(inner)
            } else {
                Err(CoreError::Shape(format!(
                    "expected envelope body to hold a JSON object, found {}",
                    json_kind(&inner)
                )))
            }
        }
        _ => Ok(Value::Object(map)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
