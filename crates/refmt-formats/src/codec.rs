//! Shared helpers for the serde_json-backed formats.

use refmt::{DecodeError, EncodeError, InitError, Value};

pub(crate) fn decode_value(data: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(data).map_err(|e| DecodeError::Syntax(e.to_string()))
}

pub(crate) fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    // JSON is total over Value; serialization to a Vec cannot fail
    // structurally, so any error is surfaced as-is.
    serde_json::to_vec(value).map_err(|e| EncodeError::Other(Box::new(e)))
}

pub(crate) fn reject_args(args: &[String]) -> Result<(), InitError> {
    if !args.is_empty() {
        return Err(InitError::ArgCount { expected: 0, got: args.len() });
    }
    Ok(())
}
