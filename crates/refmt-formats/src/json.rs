//! JSON: document-oriented in both directions.

use crate::codec::{decode_value, encode_value, reject_args};
use refmt::{DecodeError, EncodeError, InitError, InputFormat, OutputFormat, Value};

/// Parses the whole payload as one JSON value.
#[derive(Debug, Default)]
pub struct JsonInput;

impl InputFormat for JsonInput {
    fn is_record_oriented(&self) -> bool {
        false
    }

    fn init(&mut self, args: &[String]) -> Result<(), InitError> {
        reject_args(args)
    }

    fn decode(&self, data: &[u8]) -> Result<Value, DecodeError> {
        decode_value(data)
    }
}

/// Serializes a value to its canonical JSON text form.
#[derive(Debug, Default)]
pub struct JsonOutput;

impl OutputFormat for JsonOutput {
    fn is_record_oriented(&self) -> bool {
        false
    }

    fn init(&mut self, args: &[String]) -> Result<(), InitError> {
        reject_args(args)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        encode_value(value)
    }
}
