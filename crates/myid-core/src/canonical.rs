//! # Canonical Encoding: Flat Field Mappings
//!
//! Serialization collaborator for the identification types. A value type
//! turns itself into a small field struct (`IdentityFields`, `PlateFields`),
//! and this module turns that struct into an opaque string and back.
//!
//! ## Wire Format
//!
//! RFC 8785 (JSON Canonicalization Scheme) via `serde_jcs`: sorted keys,
//! compact separators, deterministic bytes. The exact bytes are not part of
//! the portable contract; only the field set and its semantics are.
//!
//! ## Flatness
//!
//! A persisted mapping is one level deep. Every value is a string, an
//! integer, or `null`. Nested objects, arrays, booleans, and floats are
//! rejected on both encode and decode so that a stored value can always be
//! read back by a consumer that only understands scalar columns.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CodecError;

/// Encode a flat field mapping as a canonical JSON string.
///
/// # Errors
///
/// Returns [`CodecError::NotAMapping`] if `fields` does not serialize to a
/// JSON object, [`CodecError::NotFlat`] if any value is not a string,
/// integer, or `null`, and [`CodecError::Serialization`] if serialization
/// itself fails.
pub fn encode_fields(fields: &impl Serialize) -> Result<String, CodecError> {
    let value = serde_json::to_value(fields)?;
    let map = check_flat(value)?;
    Ok(serde_jcs::to_string(&Value::Object(map))?)
}

/// Decode a string produced by [`encode_fields`] back into a field struct.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] for malformed JSON or a mapping
/// whose fields do not match `T`, and the flatness errors described on
/// [`encode_fields`].
pub fn decode_fields<T: DeserializeOwned>(encoded: &str) -> Result<T, CodecError> {
    let value: Value = serde_json::from_str(encoded)?;
    let map = check_flat(value)?;
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Accept a JSON object whose values are all strings, integers, or `null`.
fn check_flat(value: Value) -> Result<Map<String, Value>, CodecError> {
    let map = match value {
        Value::Object(map) => map,
        other => return Err(CodecError::NotAMapping(kind_of(&other))),
    };

    for (key, field) in &map {
        let scalar = match field {
            Value::Null | Value::String(_) => true,
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
        };
        if !scalar {
            return Err(CodecError::NotFlat { key: key.clone() });
        }
    }

    Ok(map)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
