//! # JSON Mapping
//!
//! The "Mappable" convention: construct a typed model from a loosely-typed
//! JSON object. Decoding is explicit per-field functions returning `Result`
//! over `serde_json::Value` — no reflection, no derive — because the two
//! field classes behave differently:
//!
//! - **required** keys: absent or wrong shape aborts construction of the
//!   whole node and propagates upward as a typed [`MapError`].
//! - **optional** keys: best-effort. Absent or wrong shape is swallowed and
//!   the field becomes empty.
//!
//! Arrays of nested mappable objects decode element-wise: any element failing
//! a required field fails the whole array (and therefore the parent node).
//! An absent array key yields an empty `Vec`.
//!
//! Wire shape consumed by the model types:
//!
//! ```json
//! { "id": "menu", "title": "Menu", "sections": [
//!     { "id": "general", "header": "General", "items": [
//!         { "id": "wifi",
//!           "data": { "title": "Wi-Fi", "detail": "Home", "image": "wifi" },
//!           "table": { "id": "wifi-menu", "sections": [] } }
//!     ] }
//! ] }
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// Typed decode failure for a single map node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A required key is absent.
    Missing { key: &'static str },
    /// A required key is present but has the wrong shape.
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
    /// The value handed to `from_value` was not a JSON object.
    NotAnObject,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Missing { key } => write!(f, "missing required key \"{key}\""),
            MapError::WrongType { key, expected } => {
                write!(f, "key \"{key}\" is not {expected}")
            }
            MapError::NotAnObject => write!(f, "value is not a JSON object"),
        }
    }
}

impl std::error::Error for MapError {}

/// Failure decoding a model from JSON text: either the text is not JSON at
/// all, or the object graph is missing/mistyping required keys.
#[derive(Debug)]
pub enum DecodeError {
    Parse(serde_json::Error),
    Map(MapError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Parse(e) => write!(f, "invalid JSON: {e}"),
            DecodeError::Map(e) => write!(f, "invalid model: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Parse(e) => Some(e),
            DecodeError::Map(e) => Some(e),
        }
    }
}

/// Convention for decoding a generic key-value object into a typed model.
pub trait Mappable: Sized {
    /// Construct from a JSON object's key-value map.
    fn from_map(map: &Map<String, Value>) -> Result<Self, MapError>;

    /// Construct from any JSON value; fails unless it is an object.
    fn from_value(value: &Value) -> Result<Self, MapError> {
        let map = value.as_object().ok_or(MapError::NotAnObject)?;
        Self::from_map(map)
    }

    /// Parse JSON text, then construct.
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text).map_err(DecodeError::Parse)?;
        Self::from_value(&value).map_err(DecodeError::Map)
    }
}

// ============================================================================
// Field decode helpers
// ============================================================================

/// Required string field.
pub fn required_str(map: &Map<String, Value>, key: &'static str) -> Result<String, MapError> {
    match map.get(key) {
        None => Err(MapError::Missing { key }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MapError::WrongType {
            key,
            expected: "a string",
        }),
    }
}

/// Optional string field. Absent or non-string reads as `None`.
pub fn optional_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Optional opaque object field, kept as a raw map. Absent or non-object
/// reads as `None`.
pub fn optional_object_map(map: &Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    map.get(key).and_then(Value::as_object).cloned()
}

/// Optional nested mappable. Best-effort: absent, non-object, or failing
/// its own required fields all read as `None`.
pub fn optional_object<T: Mappable>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key).and_then(|v| T::from_value(v).ok())
}

/// Array of nested mappables. Absent key → empty vec. A present key must be
/// an array of objects, and every element must decode; the first element
/// failure fails the whole array.
pub fn objects_array<T: Mappable>(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<T>, MapError> {
    let Some(value) = map.get(key) else {
        return Ok(Vec::new());
    };
    let array = value.as_array().ok_or(MapError::WrongType {
        key,
        expected: "an array",
    })?;
    array.iter().map(T::from_value).collect()
}
