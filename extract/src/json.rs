//! JSON boundary helpers.
//!
//! Thin wrappers over `serde_json` that report failures as [`DecodeError`]
//! and build PATCH bodies from carriers.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;
use crate::extract::to_map;
use crate::shape::Extract;

pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    serde_json::from_str(json).map_err(DecodeError::new::<T>)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::new::<T>)
}

/// The dirty fields of `input` as a JSON object, ready to send as a PATCH
/// body. Empty (`{}`) when nothing is dirty or `input` is not a struct.
pub fn to_patch_body<T: Extract + ?Sized>(input: &T) -> Value {
    Value::Object(to_map(input))
}
