// ABOUTME: Encoding of entities back to wire JSON.
// ABOUTME: Thin wrappers over serde_json; absent fields are omitted, never null.

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// Encodes any entity to a JSON value tree.
///
/// Encoding performs no validation; a well-formed in-memory value always
/// encodes. Absent optional fields are omitted from the output entirely,
/// and dates are written as ISO 8601 with their stored offset.
pub fn to_value<T: Serialize>(entity: &T) -> Result<Value, Error> {
    serde_json::to_value(entity).map_err(Error::from)
}

/// Encodes any entity to compact JSON text.
pub fn to_string<T: Serialize>(entity: &T) -> Result<String, Error> {
    serde_json::to_string(entity).map_err(Error::from)
}

/// Encodes any entity to human-readable, indented JSON text.
pub fn to_string_pretty<T: Serialize>(entity: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(entity).map_err(Error::from)
}

/// Encodes any entity to UTF-8 JSON bytes.
pub fn to_vec<T: Serialize>(entity: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(entity).map_err(Error::from)
}
