//! JSON Lines: record-oriented in both directions.
//!
//! The codec is JSON applied to a single line. A decode failure belongs
//! to its line alone; the orchestrator decides what already-written
//! output that failure strands.

use crate::codec::{decode_value, encode_value, reject_args};
use refmt::{DecodeError, EncodeError, InitError, InputFormat, OutputFormat, Value};

/// Parses one line as one JSON value.
#[derive(Debug, Default)]
pub struct JsonlInput;

impl InputFormat for JsonlInput {
    fn is_record_oriented(&self) -> bool {
        true
    }

    fn init(&mut self, args: &[String]) -> Result<(), InitError> {
        reject_args(args)
    }

    fn decode(&self, data: &[u8]) -> Result<Value, DecodeError> {
        decode_value(data)
    }
}

/// Serializes a value to one JSON line, without the delimiter.
#[derive(Debug, Default)]
pub struct JsonlOutput;

impl OutputFormat for JsonlOutput {
    fn is_record_oriented(&self) -> bool {
        true
    }

    fn init(&mut self, args: &[String]) -> Result<(), InitError> {
        reject_args(args)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        encode_value(value)
    }
}
